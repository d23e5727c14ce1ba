use rizal_types::TravelerLocation;

pub static TRAVELER_LOCATIONS: &[TravelerLocation] = &[
    TravelerLocation {
        name: "Calamba",
        country: "Philippines",
        period: "1861-1882, 1887-1888, 1892",
        description: "His birthplace and the place where his love for his country was born. A \
            prosperous town in Laguna province with rich agricultural land.",
        significance: "The foundation of his nationalism. Witnessing his family's persecution by \
            Spanish authorities here would shape his revolutionary ideals. He returned briefly \
            and later was exiled to Dapitan.",
        accent: (37, 99, 235),
    },
    TravelerLocation {
        name: "Madrid",
        country: "Spain",
        period: "1882-1885",
        description: "The capital where he studied medicine and philosophy at Universidad Central \
            de Madrid. He immersed himself in European culture and politics.",
        significance: "Here he completed his medical degree and began writing Noli Me Tangere. He \
            joined Filipino expatriates in advocating for reforms in the Philippines.",
        accent: (220, 38, 38),
    },
    TravelerLocation {
        name: "Heidelberg",
        country: "Germany",
        period: "1886",
        description: "A renowned university town where he specialized in ophthalmology under Dr. \
            Otto Becker. He perfected his German language skills here.",
        significance: "This period refined his medical expertise, particularly in treating his \
            mother's eye condition. The scholarly environment influenced his scientific approach \
            to social reform.",
        accent: (217, 119, 6),
    },
    TravelerLocation {
        name: "Dapitan",
        country: "Philippines",
        period: "1892-1896",
        description: "A remote town in Mindanao where he was exiled for four years. Despite \
            isolation, he established schools, hospitals, and conducted scientific research.",
        significance: "His exile demonstrated his commitment to serving Filipinos. He built a \
            water system, practiced medicine, taught children, and won a lottery. His work here \
            showed practical nationalism in action.",
        accent: (22, 163, 74),
    },
];
