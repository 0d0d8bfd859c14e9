//! Standard tip content and trigger table

use super::{Tip, TipRule};
use crate::quiz::Icon;

pub const CALORIC_DEFICIT: Tip = Tip {
    title: "Déficit Calórico Inteligente",
    description: "Consuma 300-500 calorias a menos que seu gasto diário. Não exagere para não perder massa muscular.",
    icon: Icon::Target,
};

pub const SMALL_CHANGES: Tip = Tip {
    title: "Comece com Pequenas Mudanças",
    description: "Substitua refrigerantes por água, adicione mais vegetais às refeições e reduza alimentos processados.",
    icon: Icon::Apple,
};

pub const SHORT_WORKOUTS: Tip = Tip {
    title: "Exercícios Curtos e Eficientes",
    description: "Treinos HIIT de 15-20 minutos podem ser tão eficazes quanto 1 hora de exercício moderado.",
    icon: Icon::Dumbbell,
};

pub const SUSTAINABLE_ROUTINE: Tip = Tip {
    title: "Crie uma Rotina Sustentável",
    description: "Estabeleça horários fixos, encontre um parceiro de treino e celebre pequenas vitórias.",
    icon: Icon::Trophy,
};

pub const OPTIMIZE_TIME: Tip = Tip {
    title: "Otimize Seu Tempo",
    description: "Prepare refeições no fim de semana e faça exercícios em casa. Cada minuto conta!",
    icon: Icon::Clock,
};

pub const HYDRATION: Tip = Tip {
    title: "Hidratação é Fundamental",
    description: "Beba pelo menos 2 litros de água por dia. A água acelera o metabolismo e reduz a fome.",
    icon: Icon::Sparkles,
};

pub const SLEEP_WELL: Tip = Tip {
    title: "Durma Bem",
    description: "7-9 horas de sono de qualidade são essenciais para recuperação muscular e controle hormonal.",
    icon: Icon::Heart,
};

/// Rules in evaluation order
pub static STANDARD_RULES: [TipRule; 5] = [
    TipRule {
        triggers: &["perder_peso"],
        tip: CALORIC_DEFICIT,
    },
    TipRule {
        triggers: &["precisa_melhorar", "irregular"],
        tip: SMALL_CHANGES,
    },
    TipRule {
        triggers: &["raramente", "menos_15"],
        tip: SHORT_WORKOUTS,
    },
    TipRule {
        triggers: &["motivacao", "consistencia"],
        tip: SUSTAINABLE_ROUTINE,
    },
    TipRule {
        triggers: &["tempo"],
        tip: OPTIMIZE_TIME,
    },
];

/// Appended in this order when too few rules matched
pub static STANDARD_FALLBACK: [Tip; 2] = [HYDRATION, SLEEP_WELL];

/// Fewer matched tips than this triggers the fallback pair
pub const MIN_MATCHED_TIPS: usize = 3;
