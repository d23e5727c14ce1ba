use rizal_types::QuizQuestion;

pub static QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        question: "What was Dr. José Rizal's profession?",
        options: &["Lawyer", "Ophthalmologist", "Engineer", "Priest"],
        correct: 1,
        explanation: "Rizal was an ophthalmologist (eye doctor). He studied medicine in Spain and \
            specialized in ophthalmology in Germany, hoping to cure his mother's failing \
            eyesight.",
    },
    QuizQuestion {
        question: "Which novel by Rizal means 'Touch Me Not' in Latin?",
        options: &[
            "El Filibusterismo",
            "Mi Último Adiós",
            "Noli Me Tangere",
            "Sa Aking Mga Kabata",
        ],
        correct: 2,
        explanation: "Noli Me Tangere (Touch Me Not) was Rizal's first novel, published in 1887. \
            It exposed the abuses of Spanish colonial rule and sparked the Philippine reform \
            movement.",
    },
    QuizQuestion {
        question: "Where was Rizal executed on December 30, 1896?",
        options: &["Luneta (Bagumbayan)", "Fort Santiago", "Intramuros", "Calamba"],
        correct: 0,
        explanation: "Rizal was executed by firing squad at Bagumbayan (now Luneta/Rizal Park) in \
            Manila. He was 35 years old. His execution galvanized the Philippine Revolution.",
    },
];
