//! Modal animation effects for overlays and cards.

use ratatui::layout::Rect;

use rizal_engine::{ModalEffect, ModalEffectKind};
use rizal_types::ui::ease_out_cubic;

/// Apply a modal effect to transform the base rectangle.
#[must_use]
pub fn apply_modal_effect(effect: &ModalEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        ModalEffectKind::PopScale => {
            let t = ease_out_cubic(effect.progress());
            let scale = 0.6 + 0.4 * t;
            scale_rect(base, scale, scale)
        }
        ModalEffectKind::SlideUp => {
            let t = ease_out_cubic(effect.progress());
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let base_bottom = base.y.saturating_add(base.height);
            let max_offset = viewport_bottom.saturating_sub(base_bottom);
            let offset = max_offset.min(base.height.saturating_div(2)).min(6);
            let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
            Rect {
                y: base.y.saturating_add(y_offset),
                ..base
            }
        }
        ModalEffectKind::Flip => {
            // Card narrows to a sliver at the half-way point, then widens again.
            let t = effect.progress().clamp(0.0, 1.0);
            let width_scale = ((t - 0.5).abs() * 2.0).max(0.1);
            scale_rect(base, width_scale, 1.0)
        }
    }
}

fn scale_rect(base: Rect, scale_x: f32, scale_y: f32) -> Rect {
    let width = (f32::from(base.width) * scale_x).round() as u16;
    let height = (f32::from(base.height) * scale_y).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::layout::Rect;
    use rizal_engine::ModalEffect;

    use super::apply_modal_effect;

    const BASE: Rect = Rect {
        x: 10,
        y: 5,
        width: 40,
        height: 20,
    };
    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 40,
    };

    #[test]
    fn pop_scale_grows_to_base() {
        let mut effect = ModalEffect::pop_scale(Duration::from_millis(200));
        let start = apply_modal_effect(&effect, BASE, VIEWPORT);
        assert!(start.width < BASE.width && start.height < BASE.height);
        effect.advance(Duration::from_millis(200));
        assert_eq!(apply_modal_effect(&effect, BASE, VIEWPORT), BASE);
    }

    #[test]
    fn slide_up_settles_in_place() {
        let mut effect = ModalEffect::slide_up(Duration::from_millis(300));
        let start = apply_modal_effect(&effect, BASE, VIEWPORT);
        assert!(start.y > BASE.y);
        assert_eq!(start.height, BASE.height);
        effect.advance(Duration::from_millis(300));
        assert_eq!(apply_modal_effect(&effect, BASE, VIEWPORT), BASE);
    }

    #[test]
    fn flip_narrows_mid_way_and_keeps_height() {
        let mut effect = ModalEffect::flip(Duration::from_millis(400));
        effect.advance(Duration::from_millis(200));
        let mid = apply_modal_effect(&effect, BASE, VIEWPORT);
        assert!(mid.width <= BASE.width / 5);
        assert_eq!(mid.height, BASE.height);
        effect.advance(Duration::from_millis(200));
        assert_eq!(apply_modal_effect(&effect, BASE, VIEWPORT), BASE);
    }
}
