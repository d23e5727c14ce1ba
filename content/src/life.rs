use rizal_types::TimelineEvent;

/// Milestones for "Life's Journey".
pub static EVENTS: &[TimelineEvent] = &[
    TimelineEvent {
        year: "1861",
        title: "Birth in Calamba",
        description: "Born José Protasio Rizal Mercado y Alonso Realonda",
        details: "Born on June 19 in Calamba, Laguna. The seventh of eleven children in a \
            prosperous family. His early education was influenced by his mother, Teodora Alonso, \
            who taught him the alphabet and prayers.",
    },
    TimelineEvent {
        year: "1872-1877",
        title: "Ateneo Education",
        description: "Studied at Ateneo Municipal de Manila",
        details: "Excelled in his studies, earning the highest honors. He was a member of the \
            Marian Congregation and showed early signs of his intellectual brilliance. Graduated \
            with a Bachelor of Arts degree with highest honors.",
    },
    TimelineEvent {
        year: "1882",
        title: "Departure for Spain",
        description: "Left for Europe to continue his education",
        details: "At age 21, he secretly left the Philippines for Spain to escape Spanish \
            persecution and complete his medical studies. He enrolled at Universidad Central de \
            Madrid and later earned his medical degree.",
    },
    TimelineEvent {
        year: "1887",
        title: "Noli Me Tangere Published",
        description: "Published his revolutionary novel in Berlin",
        details: "His groundbreaking novel exposed the injustices of Spanish colonial rule in the \
            Philippines. The title means 'Touch Me Not' and sparked the Philippine reform \
            movement. Funded the printing himself through help from friends.",
    },
    TimelineEvent {
        year: "1890",
        title: "Time in Brussels",
        description: "Annotated Morga's Sucesos de las Islas Filipinas",
        details: "While in Brussels, Rizal worked on annotating Antonio de Morga's historical \
            work 'Sucesos de las Islas Filipinas' (Events in the Philippine Islands). His \
            scholarly annotations challenged Spanish colonial narratives and highlighted the \
            rich pre-colonial Filipino civilization.",
    },
    TimelineEvent {
        year: "1892",
        title: "La Liga Filipina Founded",
        description: "Established a civic organization for reforms",
        details: "On July 3, 1892, Rizal founded La Liga Filipina in Manila, a progressive \
            organization aimed at social reforms through peaceful means. It advocated for \
            political representation, education, and unity among Filipinos. The organization \
            was short-lived as Rizal was arrested days later.",
    },
    TimelineEvent {
        year: "1892",
        title: "Exile to Dapitan",
        description: "Banished to Dapitan, Zamboanga del Norte",
        details: "Despite exile, he practiced medicine, taught children, built a water system, \
            and conducted scientific research. He established a school and won the lottery, \
            which he used to buy land. This period showed his dedication to uplifting his \
            countrymen.",
    },
    TimelineEvent {
        year: "1896",
        title: "Martyrdom",
        description: "Executed by firing squad at Bagumbayan",
        details: "On December 30, at age 35, he was executed by Spanish authorities for alleged \
            rebellion. His last poem, 'Mi Último Adiós,' was hidden in an oil lamp. His death \
            galvanized the Philippine Revolution and he became the national hero.",
    },
];
