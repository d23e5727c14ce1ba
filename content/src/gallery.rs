use rizal_types::Photo;

pub static PHOTOS: &[Photo] = &[
    Photo {
        id: 1,
        title: "Young Rizal",
        description: "Portrait of José Rizal during his student years",
        asset: "gallery-1.jpg",
    },
    Photo {
        id: 2,
        title: "Rizal in Europe",
        description: "Rizal during his travels across Europe",
        asset: "gallery-2.jpg",
    },
    Photo {
        id: 3,
        title: "The Execution Site",
        description: "Bagumbayan Field (now Luneta Park) where Rizal was executed",
        asset: "gallery-3.jpg",
    },
    Photo {
        id: 4,
        title: "Rizal Monument",
        description: "The iconic monument in Rizal Park, Manila",
        asset: "gallery-4.jpg",
    },
    Photo {
        id: 5,
        title: "Dapitan Exile",
        description: "Rizal's home during his exile in Dapitan",
        asset: "gallery-5.jpg",
    },
    Photo {
        id: 6,
        title: "Original Manuscripts",
        description: "Rizal's handwritten manuscripts and letters",
        asset: "gallery-6.jpg",
    },
];
