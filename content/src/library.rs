use rizal_types::{Book, Poem};

pub static BOOKS: &[Book] = &[
    Book {
        title: "Noli Me Tangere",
        year: "1887",
        summary: "A social novel that exposed the corruption and abuse of the Spanish colonial \
            government and clergy in the Philippines.",
        significance: "This groundbreaking work awakened Filipino national consciousness and \
            sparked the reform movement. It is considered one of the greatest novels in \
            Philippine literature.",
    },
    Book {
        title: "El Filibusterismo",
        year: "1891",
        summary: "The sequel to Noli Me Tangere, depicting a darker and more revolutionary \
            narrative of Philippine society under Spanish rule.",
        significance: "This novel showed a more radical approach to reform, reflecting Rizal's \
            growing frustration with Spanish colonial policies. It inspired revolutionary \
            movements.",
    },
    Book {
        title: "Mi Último Adiós",
        year: "1896",
        summary: "His final poem, written hours before his execution, expressing his love for the \
            Philippines and hope for its future.",
        significance: "This farewell poem has become one of the most famous pieces of Philippine \
            literature. Hidden in an oil lamp, it was discovered after his death and inspired \
            generations.",
    },
    Book {
        title: "To the Young Women of Malolos",
        year: "1889",
        summary: "An essay celebrating Filipino women who fought for the right to education and \
            advocating for women's empowerment.",
        significance: "This work demonstrated Rizal's progressive views on gender equality and \
            education, inspiring Filipino women to pursue knowledge and independence.",
    },
];

pub static POEM: Poem = Poem {
    title: "Mi Último Adiós",
    subtitle: "Rizal's Final Poem, December 29, 1896",
    original: &[
        &[
            "Adiós, Patria adorada, región del sol querida,",
            "Perla del Mar de Oriente, nuestro perdido Edén,",
            "A darte voy, alegre, la triste mustia vida;",
            "Y fuera más brillante, más fresca, más florida,",
            "También por tí la diera, la diera por tu bien.",
        ],
        &[
            "En campos de batalla, luchando con delirio,",
            "Otros te dan sus vidas sin dudas, sin pesar;",
            "El sitio nada importa, ciprés, laurel o lirio,",
            "Cadalso o campo abierto, combate o cruel martirio,",
            "Lo mismo es si lo piden la patria y el hogar.",
        ],
        &[
            "Yo muero cuando veo que el cielo se colora",
            "Y al fin anuncia el día tras lóbrego capuz;",
            "Si grana necesitas para teñir tu aurora,",
            "Vierte la sangre mía, derrámala en buen hora",
            "Y dórela un reflejo de su naciente luz.",
        ],
    ],
    translation: &[
        &[
            "Farewell, dear Fatherland, clime of the sun caress'd,",
            "Pearl of the Orient seas, our Eden lost!",
            "Gladly now I go to give thee this faded life's best,",
            "And were it brighter, fresher, or more blest,",
            "Still would I give it thee, nor count the cost.",
        ],
        &[
            "On the field of battle, 'mid the frenzy of fight,",
            "Others have given their lives, without doubt or heed;",
            "The place matters not: cypress or laurel or lily white,",
            "Scaffold or open plain, combat or martyrdom's plight,",
            "'Tis ever the same, to serve our home and country's need.",
        ],
        &[
            "I die just when I see the dawn break,",
            "Through the gloom of night, to herald the day;",
            "And if color is lacking my blood thou shalt take,",
            "Pour'd out at need for thy dear sake,",
            "To dye with its crimson the waking ray.",
        ],
    ],
    original_note: "[Excerpt: first three stanzas of fourteen]",
    translation_note: "[Translated by Charles Derbyshire]",
    audio_asset: "audio/mi-ultimo-adios.mp3",
};
