use rizal_types::{LegacyPillar, Quote};

pub static HERO_QUOTE: Quote = Quote {
    text: "He who does not know how to look back at where he came from will never get to his \
        destination.",
    attribution: "Dr. José Rizal",
};

pub static PILLARS: &[LegacyPillar] = &[
    LegacyPillar {
        title: "The Rizal Law",
        body: "Republic Act No. 1425, enacted in 1956, mandates that all Filipino students study \
            the life, works, and writings of José Rizal, particularly his novels Noli Me Tangere \
            and El Filibusterismo.",
        footnote: "This law ensures that every generation of Filipinos understands the sacrifices \
            made for their freedom and the importance of national identity, critical thinking, \
            and peaceful reform.",
    },
    LegacyPillar {
        title: "Global Monuments",
        body: "Monuments honoring Dr. Rizal stand in countries across the globe, including Spain, \
            Germany, the United States, Japan, and many others, recognizing his international \
            significance and intellectual contributions.",
        footnote: "These memorials serve as a testament to his universal message of justice, \
            education, and the power of the pen over the sword in achieving social change.",
    },
    LegacyPillar {
        title: "Symbol of Nationalism",
        body: "Rizal remains the primary symbol of Filipino nationalism, representing the ideals \
            of peaceful reform, intellectual excellence, and unwavering love for one's country. \
            His example continues to inspire activists and reformers worldwide.",
        footnote: "His life demonstrates that true patriotism is expressed through education, \
            cultural pride, and the courage to speak truth to power, even at the cost of one's \
            life.",
    },
];

pub static CLOSING_QUOTE: Quote = Quote {
    text: "The glory of saving a country is not for him who has contributed to its ruin.",
    attribution: "Dr. José Rizal",
};

pub const FOOTER_TITLE: &str = "Dr. José Rizal (1861-1896)";
pub const FOOTER_TAGLINE: &str = "Philippine National Hero • Writer • Ophthalmologist • Polymath";
pub const FOOTER_MOTTO: &str = "\"The youth is the hope of our future.\"";
