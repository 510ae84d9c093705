use crate::application::currency::CurrencyFormat;
use crate::domain::chart::{BarStyle, Orientation};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub source: SourceSettings,
    pub server: ServerSettings,
    pub currency: CurrencyFormat,
    pub cards: Vec<CardConfig>,
    pub charts: Vec<ChartConfig>,
    pub view: ViewSettings,
    pub status: Option<StatusConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: SourceSettings::default(),
            server: ServerSettings::default(),
            currency: CurrencyFormat::default(),
            cards: default_cards(),
            charts: default_charts(),
            view: ViewSettings::default(),
            status: None,
        }
    }
}

impl DashboardConfig {
    pub fn bindings(&self) -> BindingsConfig {
        BindingsConfig {
            cards: self.cards.clone(),
            charts: self.charts.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SourceSettings {
    pub base_url: String,
    pub path: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            path: "/api/dashboard/resumo".to_string(),
        }
    }
}

impl SourceSettings {
    pub fn summary_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Which summary fields land on which display targets.
#[derive(Debug, Clone)]
pub struct BindingsConfig {
    pub cards: Vec<CardConfig>,
    pub charts: Vec<ChartConfig>,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            cards: default_cards(),
            charts: default_charts(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CardConfig {
    pub metric: String,
    pub target: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub dataset: String,
    pub target: String,
    pub label: String,
    pub color: String,
    pub border_color: Option<String>,
    #[serde(default = "default_border_width")]
    pub border_width: u32,
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,
    #[serde(default = "default_begin_at_zero")]
    pub begin_at_zero: bool,
}

impl ChartConfig {
    pub fn style(&self) -> BarStyle {
        BarStyle::new(
            self.label.clone(),
            self.color.clone(),
            self.border_color.clone(),
            self.border_width,
            self.orientation,
            self.begin_at_zero,
        )
    }
}

/// Targets present in the hosted view.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ViewSettings {
    pub text_targets: Vec<String>,
    pub canvas_targets: Vec<String>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            text_targets: vec![
                "card-custo-mensal".to_string(),
                "card-perda-mensal".to_string(),
            ],
            canvas_targets: vec!["CTotalLoja".to_string(), "chartDezMaisPerdas".to_string()],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatusConfig {
    pub target: String,
    #[serde(default = "default_loaded_message")]
    pub loaded: String,
    #[serde(default = "default_failed_message")]
    pub failed: String,
}

fn default_cards() -> Vec<CardConfig> {
    vec![
        CardConfig {
            metric: "custo_mensal".to_string(),
            target: "card-custo-mensal".to_string(),
        },
        CardConfig {
            metric: "perda_mensal".to_string(),
            target: "card-perda-mensal".to_string(),
        },
    ]
}

fn default_charts() -> Vec<ChartConfig> {
    vec![
        ChartConfig {
            dataset: "grafico_custo_loja".to_string(),
            target: "CTotalLoja".to_string(),
            label: "Custo Total (R$)".to_string(),
            color: "rgba(54, 162, 235, 0.7)".to_string(),
            border_color: None,
            border_width: default_border_width(),
            orientation: default_orientation(),
            begin_at_zero: default_begin_at_zero(),
        },
        ChartConfig {
            dataset: "grafico_top_perdas".to_string(),
            target: "chartDezMaisPerdas".to_string(),
            label: "Top Perdas (R$)".to_string(),
            color: "rgba(255, 99, 132, 0.7)".to_string(),
            border_color: None,
            border_width: default_border_width(),
            orientation: default_orientation(),
            begin_at_zero: default_begin_at_zero(),
        },
    ]
}

fn default_border_width() -> u32 {
    1
}

fn default_orientation() -> Orientation {
    Orientation::Horizontal
}

fn default_begin_at_zero() -> bool {
    true
}

fn default_loaded_message() -> String {
    String::new()
}

fn default_failed_message() -> String {
    "Falha ao carregar o painel".to_string()
}

/// Load `config/dashboard.*` (optional) with `DASHBOARD__*` environment overrides.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
