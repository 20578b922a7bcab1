//! Store configuration.
//!
//! Everything a shop owner edits lives here: contact number, greetings,
//! address for the map, the menu and the FAQ.

use serde::{Deserialize, Serialize};

use crate::error::{CartError, ConfigError};
use crate::money::Money;
use crate::whatsapp;

/// Store configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Business identity.
    #[serde(default)]
    pub business: BusinessConfig,

    /// WhatsApp contact settings.
    #[serde(default)]
    pub whatsapp: WhatsAppSettings,

    /// Map placeholder settings.
    #[serde(default)]
    pub map: MapConfig,

    /// Menu items offered with an "add to cart" button.
    #[serde(default = "default_menu")]
    pub menu: Vec<MenuEntry>,

    /// Frequently asked questions.
    #[serde(default = "default_faq")]
    pub faq: Vec<FaqEntry>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            business: BusinessConfig::default(),
            whatsapp: WhatsAppSettings::default(),
            map: MapConfig::default(),
            menu: default_menu(),
            faq: default_faq(),
        }
    }
}

impl StoreConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check store rules serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.business.name.trim().is_empty() {
            return Err(ConfigError::Invalid("business name is empty".to_string()));
        }

        let number = &self.whatsapp.number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid(format!(
                "whatsapp number must be digits only, got {:?}",
                number
            )));
        }

        for entry in &self.menu {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::Invalid("menu entry with empty name".to_string()));
            }
            if entry.money().map_or(true, |m| m.is_negative()) {
                return Err(ConfigError::Invalid(format!(
                    "menu entry {:?} has invalid price {}",
                    entry.name, entry.price
                )));
            }
        }

        Ok(())
    }

    /// Maps link for the placeholder click.
    pub fn maps_url(&self) -> Result<String, CartError> {
        whatsapp::maps_search_url(&self.map.query)
    }
}

/// Business identity shown in the header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessConfig {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "4 Amigos Lancheria".to_string(),
            tagline: "Lanches artesanais feitos na hora".to_string(),
        }
    }
}

/// WhatsApp contact settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatsAppSettings {
    /// Destination number, digits only (country and area code included).
    #[serde(default = "default_number")]
    pub number: String,

    /// Message pre-filled into plain `wa.me` links on the page.
    #[serde(default = "default_message")]
    pub default_message: String,

    /// First line of a cart order message.
    #[serde(default = "default_order_greeting")]
    pub order_greeting: String,
}

fn default_number() -> String {
    "5511999999999".to_string()
}

fn default_message() -> String {
    "Olá! Gostaria de fazer um pedido.".to_string()
}

fn default_order_greeting() -> String {
    "Olá! Gostaria de fazer o seguinte pedido:".to_string()
}

impl Default for WhatsAppSettings {
    fn default() -> Self {
        Self {
            number: default_number(),
            default_message: default_message(),
            order_greeting: default_order_greeting(),
        }
    }
}

impl WhatsAppSettings {
    /// Plain contact link carrying the default message.
    pub fn contact_link(&self) -> Result<String, CartError> {
        whatsapp::deep_link(&self.number, &self.default_message)
    }
}

/// Map placeholder settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Free-text address searched on Google Maps.
    pub query: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            query: "Rua das Palmeiras 1234 Vila Nova São Paulo SP".to_string(),
        }
    }
}

/// A menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in reais, e.g. `18.5`.
    pub price: f64,
}

impl MenuEntry {
    pub fn new(name: &str, description: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }

    /// Price as money, if it is a representable amount.
    pub fn money(&self) -> Option<Money> {
        Money::from_decimal(self.price)
    }
}

/// A question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("X-Burger", "Pão, hambúrguer artesanal, queijo e molho da casa", 18.5),
        MenuEntry::new("X-Salada", "X-Burger com alface, tomate e cebola roxa", 21.0),
        MenuEntry::new("X-Tudo", "Hambúrguer duplo, bacon, ovo, presunto e queijo", 29.9),
        MenuEntry::new("Batata Frita", "Porção individual crocante", 12.0),
        MenuEntry::new("Suco Natural", "Laranja, limão ou maracujá (500 ml)", 9.5),
    ]
}

fn default_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "Vocês fazem entrega?",
            "Sim! Entregamos em toda a região. Faça seu pedido pelo WhatsApp.",
        ),
        FaqEntry::new(
            "Quais as formas de pagamento?",
            "Aceitamos dinheiro, PIX e cartões de débito e crédito na entrega.",
        ),
        FaqEntry::new(
            "Qual o horário de funcionamento?",
            "Terça a domingo, das 18h às 23h30.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StoreConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.menu.is_empty());
        assert!(!config.faq.is_empty());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config = StoreConfig::from_toml_str(
            r#"
[whatsapp]
number = "5521988887777"
"#,
        )
        .unwrap();

        assert_eq!(config.whatsapp.number, "5521988887777");
        assert_eq!(config.whatsapp.order_greeting, default_order_greeting());
        assert_eq!(config.business, BusinessConfig::default());
        assert_eq!(config.menu, default_menu());
    }

    #[test]
    fn test_parse_menu_and_faq() {
        let config = StoreConfig::from_toml_str(
            r#"
[business]
name = "Lanche Bom"

[[menu]]
name = "Misto Quente"
price = 8.75

[[faq]]
question = "Tem opção vegetariana?"
answer = "Sim."
"#,
        )
        .unwrap();

        assert_eq!(config.business.name, "Lanche Bom");
        assert_eq!(config.menu.len(), 1);
        assert_eq!(config.menu[0].money(), Some(Money::new(875)));
        assert_eq!(config.faq[0].answer, "Sim.");
    }

    #[test]
    fn test_rejects_bad_number() {
        let err = StoreConfig::from_toml_str(
            r#"
[whatsapp]
number = "+55 11 9999"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut config = StoreConfig::default();
        config.menu.push(MenuEntry::new("Brinde", "", -1.0));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        let err = StoreConfig::from_toml_str("[whatsapp\nnumber = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_unrepresentable_price() {
        let mut config = StoreConfig::default();
        config.menu.push(MenuEntry::new("Banquete", "", 1e17));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = StoreConfig::default();
        config.menu.push(MenuEntry::new("Erro", "", f64::NAN));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_links() {
        let config = StoreConfig::default();
        assert!(config
            .maps_url()
            .unwrap()
            .starts_with("https://www.google.com/maps/search/?api=1&query=Rua+das+Palmeiras"));
        assert!(config
            .whatsapp
            .contact_link()
            .unwrap()
            .starts_with("https://wa.me/5511999999999?text="));
    }
}
