//! Fixed question catalog
//!
//! Five questions, four options each. The catalog is static data and is
//! never mutated at runtime.

use serde::Serialize;

/// Icon reference shared by options and tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Target,
    Dumbbell,
    Heart,
    Sparkles,
    Apple,
    Clock,
    Zap,
    Trophy,
}

impl Icon {
    /// Terminal glyph used when rendering
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Target => "🎯",
            Icon::Dumbbell => "🏋",
            Icon::Heart => "❤",
            Icon::Sparkles => "✨",
            Icon::Apple => "🍎",
            Icon::Clock => "⏰",
            Icon::Zap => "⚡",
            Icon::Trophy => "🏆",
        }
    }
}

/// One selectable answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    /// Machine-readable token stored in answers
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// A fixed quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based identifier
    pub id: u8,
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

impl Question {
    /// Look up an option by its token
    pub fn option(&self, value: &str) -> Option<&'static QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.option(value).is_some()
    }
}

const fn opt(value: &'static str, label: &'static str, icon: Icon) -> QuizOption {
    QuizOption { value, label, icon }
}

pub static QUESTIONS: [Question; 5] = [
    Question {
        id: 1,
        prompt: "Qual é o seu principal objetivo?",
        options: &[
            opt("perder_peso", "Perder peso", Icon::Target),
            opt("ganhar_massa", "Ganhar massa muscular", Icon::Dumbbell),
            opt("manter_forma", "Manter a forma", Icon::Heart),
            opt("melhorar_saude", "Melhorar saúde geral", Icon::Sparkles),
        ],
    },
    Question {
        id: 2,
        prompt: "Como você descreveria seus hábitos alimentares?",
        options: &[
            opt("saudavel", "Muito saudável", Icon::Apple),
            opt("moderado", "Moderadamente saudável", Icon::Apple),
            opt("irregular", "Irregular", Icon::Apple),
            opt("precisa_melhorar", "Precisa melhorar muito", Icon::Apple),
        ],
    },
    Question {
        id: 3,
        prompt: "Com que frequência você se exercita?",
        options: &[
            opt("diario", "Todos os dias", Icon::Dumbbell),
            opt("3_5_vezes", "3-5 vezes por semana", Icon::Dumbbell),
            opt("1_2_vezes", "1-2 vezes por semana", Icon::Dumbbell),
            opt("raramente", "Raramente ou nunca", Icon::Dumbbell),
        ],
    },
    Question {
        id: 4,
        prompt: "Quanto tempo você pode dedicar aos exercícios diariamente?",
        options: &[
            opt("mais_60", "Mais de 60 minutos", Icon::Clock),
            opt("30_60", "30-60 minutos", Icon::Clock),
            opt("15_30", "15-30 minutos", Icon::Clock),
            opt("menos_15", "Menos de 15 minutos", Icon::Clock),
        ],
    },
    Question {
        id: 5,
        prompt: "Qual é o seu maior desafio?",
        options: &[
            opt("motivacao", "Falta de motivação", Icon::Zap),
            opt("tempo", "Falta de tempo", Icon::Clock),
            opt("conhecimento", "Falta de conhecimento", Icon::Sparkles),
            opt("consistencia", "Manter a consistência", Icon::Trophy),
        ],
    },
];

/// All questions, in presentation order
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn question_count() -> usize {
    QUESTIONS.len()
}
