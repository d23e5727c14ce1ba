use rizal_types::{Coordinates, LocationRecord};

/// Stops on the world-map journey, in chronological order.
pub static LOCATIONS: &[LocationRecord] = &[
    LocationRecord {
        id: 1,
        name: "Calamba, Laguna",
        country: "Philippines",
        coordinates: Coordinates::new(14.2113, 121.1535),
        period: "1861-1882, 1887-1888",
        description: "Birthplace and childhood home of José Rizal. This is where the young Pepe \
            spent his formative years, nurtured by his mother Teodora Alonso who taught him to \
            read and write.",
        significance: "Where Rizal spent his formative years, learning from his mother and \
            developing his love for the Philippines. His idyllic childhood in Calamba would later \
            inspire many scenes in his novels.",
    },
    LocationRecord {
        id: 2,
        name: "Madrid",
        country: "Spain",
        coordinates: Coordinates::new(40.4168, -3.7038),
        period: "1882-1885",
        description: "Rizal studied medicine at Universidad Central de Madrid, immersing himself \
            in European intellectual movements. He also studied painting, sculpture, and \
            literature while developing his political consciousness.",
        significance: "Completed his medical studies and began writing Noli Me Tangere. \
            Witnessed European intellectual movements and became involved with Filipino \
            expatriate reformist circles, shaping his vision for Philippine independence.",
    },
    LocationRecord {
        id: 3,
        name: "Heidelberg",
        country: "Germany",
        coordinates: Coordinates::new(49.3988, 8.6821),
        period: "1886",
        description: "Specialized in ophthalmology under the tutelage of Dr. Otto Becker, one of \
            Europe's leading eye specialists. His motivation was to cure his mother's \
            deteriorating eyesight.",
        significance: "Trained under the renowned ophthalmologist Dr. Otto Becker. Completed his \
            eye specialization to help his mother. This period also saw him working intensively \
            on completing Noli Me Tangere.",
    },
    LocationRecord {
        id: 4,
        name: "Brussels",
        country: "Belgium",
        coordinates: Coordinates::new(50.8503, 4.3517),
        period: "1890-1891",
        description: "In Brussels, Rizal lived a modest life while working on his scholarly \
            annotation of Antonio de Morga's historical work. He also completed El \
            Filibusterismo during this period.",
        significance: "Worked on annotating Sucesos de las Islas Filipinas, challenging Spanish \
            colonial narratives about Philippine history. His annotations proved that Filipinos \
            had a rich, sophisticated civilization before Spanish colonization.",
    },
    LocationRecord {
        id: 5,
        name: "Dapitan",
        country: "Philippines",
        coordinates: Coordinates::new(8.6497, 123.4181),
        period: "1892-1896",
        description: "Exiled to this remote town in Mindanao, Rizal transformed it into a model \
            community. He practiced medicine, taught children, built infrastructure, and \
            conducted scientific research.",
        significance: "Despite exile, established a school, practiced medicine, conducted \
            scientific research, and improved the community. His successful eye surgeries, \
            agricultural innovations, and civic projects demonstrated his commitment to \
            uplifting Filipino society.",
    },
    LocationRecord {
        id: 6,
        name: "Manila",
        country: "Philippines",
        coordinates: Coordinates::new(14.5995, 120.9842),
        period: "1892, 1896",
        description: "The capital city where Rizal founded La Liga Filipina and where his life \
            journey ended. His execution at Bagumbayan (now Rizal Park) transformed him from \
            reformist to martyr.",
        significance: "Founded La Liga Filipina in 1892. Executed at Bagumbayan (Luneta) on \
            December 30, 1896. His martyrdom sparked the Philippine Revolution and made him the \
            country's greatest national hero.",
    },
];
