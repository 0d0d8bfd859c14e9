//! Subscription upsell shown with the results

/// Static offer copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    pub headline: &'static str,
    pub plan: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub call_to_action: &'static str,
    pub footnote: &'static str,
}

pub const SUBSCRIPTION_OFFER: Offer = Offer {
    headline: "Transforme Sua Vida Hoje!",
    plan: "Plano Completo de Emagrecimento",
    price: "R$ 39",
    period: "mês",
    features: &[
        "Plano alimentar personalizado",
        "Treinos adaptados ao seu nível",
        "Acompanhamento semanal",
        "Suporte via WhatsApp",
        "Receitas saudáveis exclusivas",
        "Comunidade motivadora",
    ],
    call_to_action: "Começar Agora",
    footnote: "Pagamento seguro • Cancele quando quiser",
};

impl Offer {
    /// "R$ 39/mês"
    pub fn price_line(&self) -> String {
        format!("{}/{}", self.price, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_line() {
        assert_eq!(SUBSCRIPTION_OFFER.price_line(), "R$ 39/mês");
        assert_eq!(SUBSCRIPTION_OFFER.features.len(), 6);
    }
}
