/// Every user-facing label in one place
pub struct UiText {
    pub title: &'static str,
    pub price_label: &'static str,
    pub resistance_label: &'static str,
    pub support_label: &'static str,
    pub sentiment_label: &'static str,
    pub sentiment_no_data: &'static str,
    pub buy_banner: &'static str,
    pub sell_banner: &'static str,
    pub waiting_banner: &'static str,
    pub levels_pending: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    title: "Sistema de Trading Integrado: PIP + Sentiment Analysis",
    price_label: "Precio Actual",
    resistance_label: "Resistencia",
    support_label: "Soporte",
    sentiment_label: "Sentimiento Promedio",
    sentiment_no_data: "sin titulares",
    buy_banner: "SEÑAL DE COMPRA: Precio rompió resistencia con",
    sell_banner: "SEÑAL DE VENTA: Precio rompió soporte con",
    waiting_banner: "Esperando ruptura significativa...",
    levels_pending: "n/d",
};
