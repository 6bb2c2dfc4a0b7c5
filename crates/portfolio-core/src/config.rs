//! Site configuration.
//!
//! Everything the page displays but does not compute lives here: the
//! navigation order, section copy, company records, contact details and
//! the timing constants of the loading screen and contact form.
//!
//! Every field has a default, so a JSON file only needs the keys it wants
//! to override:
//!
//! ```json
//! {
//!   "identity": { "owner": "Ana" },
//!   "timings": { "loading_delay_ms": 500 }
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::section::SectionId;

/// Icon names understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    User,
    Briefcase,
    Building,
    MessageCircle,
    Users,
    Shield,
    TrendingUp,
}

/// Who the site is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub owner: String,
    pub site_title: String,
    pub tagline: String,
    pub footer_tagline: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            owner: "Rhaynê".to_string(),
            site_title: "Rhaynê's Website".to_string(),
            tagline: "Entusiasta em tecnologia e estudante de Engenharia de Software".to_string(),
            footer_tagline: "Tecnologia, inovação e empreendedorismo".to_string(),
        }
    }
}

/// A navigation entry. The order of entries is the scroll tracking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub id: SectionId,
    pub label: String,
    pub icon: Icon,
}

impl SectionEntry {
    fn new(id: SectionId, label: &str, icon: Icon) -> Self {
        Self {
            id,
            label: label.to_string(),
            icon,
        }
    }
}

fn default_sections() -> Vec<SectionEntry> {
    vec![
        SectionEntry::new(SectionId::Home, "Início", Icon::User),
        SectionEntry::new(SectionId::About, "Sobre Mim", Icon::User),
        SectionEntry::new(SectionId::Experience, "Experiência", Icon::Briefcase),
        SectionEntry::new(SectionId::Companies, "Empresas", Icon::Building),
        SectionEntry::new(SectionId::Contact, "Contato", Icon::MessageCircle),
    ]
}

/// Title and subtitle shown above a section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeader {
    pub title: String,
    pub subtitle: String,
}

impl SectionHeader {
    fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// Biography section. `body` is Markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub header: SectionHeader,
    pub heading: String,
    pub body: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            header: SectionHeader::new("Sobre Mim", "Conheça um pouco da minha jornada"),
            heading: "Minha Trajetória".to_string(),
            body: "Sou um apaixonado por tecnologia em constante evolução, atualmente cursando \
                   Engenharia de Software. Minha jornada começou com curiosidade e se transformou \
                   em uma paixão genuína por criar soluções inovadoras.\n\n\
                   Através dos anos, desenvolvi expertise em diversas áreas tecnológicas, desde \
                   desenvolvimento de software até soluções empresariais. Acredito que a tecnologia \
                   tem o poder de transformar negócios e melhorar a vida das pessoas.\n\n\
                   Minha abordagem combina conhecimento técnico sólido com visão estratégica de \
                   negócios, sempre buscando entregar resultados excepcionais."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceContent {
    pub header: SectionHeader,
    pub heading: String,
    pub items: Vec<ExperienceItem>,
}

impl Default for ExperienceContent {
    fn default() -> Self {
        let item = |title: &str, description: &str| ExperienceItem {
            title: title.to_string(),
            description: description.to_string(),
        };
        Self {
            header: SectionHeader::new("Experiência", "Minha jornada técnica e profissional"),
            heading: "Desenvolvimento Técnico".to_string(),
            items: vec![
                item(
                    "Engenharia de Software",
                    "Estudante dedicado com foco em desenvolvimento full-stack, arquitetura de software e metodologias ágeis.",
                ),
                item(
                    "Tecnologias",
                    "Experiência com diversas linguagens e frameworks modernos, sempre atualizando conhecimentos com as últimas tendências.",
                ),
                item(
                    "Gestão de Projetos",
                    "Capacidade de liderança em projetos tecnológicos, desde concepção até implementação e entrega.",
                ),
            ],
        }
    }
}

/// An affiliated company card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompaniesContent {
    pub header: SectionHeader,
    pub entries: Vec<CompanyProfile>,
}

impl Default for CompaniesContent {
    fn default() -> Self {
        let company = |name: &str, subtitle: &str, description: &str, icon| CompanyProfile {
            name: name.to_string(),
            subtitle: subtitle.to_string(),
            description: description.to_string(),
            icon,
        };
        Self {
            header: SectionHeader::new("Minhas Empresas", "Empreendimentos que lidero e coordeno"),
            entries: vec![
                company(
                    "Ribeiro & Pimentel",
                    "Representação Comercial",
                    "Empresa de representação comercial consolidada no mercado desde 2000, \
                     oferecendo soluções completas em vendas e relacionamento comercial.",
                    Icon::Users,
                ),
                company(
                    "Kyvra Technology",
                    "Segurança Eletrônica",
                    "Especializada em soluções avançadas de segurança eletrônica, oferecendo \
                     tecnologia de ponta para proteção residencial e empresarial.",
                    Icon::Shield,
                ),
                company(
                    "Topo Brasil",
                    "Marketing Digital",
                    "Focada em tráfego pago, design e serviços de marketing digital, \
                     ajudando empresas a alcançarem seus objetivos online.",
                    Icon::TrendingUp,
                ),
            ],
        }
    }
}

/// Contact card details next to the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub header: SectionHeader,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            header: SectionHeader::new("Entre em Contato", "Vamos trabalhar juntos"),
            email: "contato@rhayne.com".to_string(),
            phone: "+55 (11) 9 9999-9999".to_string(),
            location: "São Paulo, Brasil".to_string(),
            github_url: None,
            linkedin_url: None,
        }
    }
}

/// Timer and scroll constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// How long the loading placeholder stays up after mount
    pub loading_delay_ms: u64,
    /// Simulated network latency of a contact submission
    pub submit_latency_ms: u64,
    /// How long the success message stays before the form resets
    pub reset_delay_ms: u64,
    /// Pixels added to the scroll position before bounds testing
    pub scroll_probe_offset: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            loading_delay_ms: 2000,
            submit_latency_ms: 1500,
            reset_delay_ms: 3000,
            scroll_probe_offset: 100.0,
        }
    }
}

impl Timings {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

/// Complete configuration of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub identity: Identity,
    pub sections: Vec<SectionEntry>,
    pub about: AboutContent,
    pub experience: ExperienceContent,
    pub companies: CompaniesContent,
    pub contact: ContactDetails,
    pub timings: Timings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            identity: Identity::default(),
            sections: default_sections(),
            about: AboutContent::default(),
            experience: ExperienceContent::default(),
            companies: CompaniesContent::default(),
            contact: ContactDetails::default(),
            timings: Timings::default(),
        }
    }
}

impl SiteConfig {
    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "loaded site configuration");
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> SiteResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.sections.is_empty() {
            return Err(SiteError::InvalidConfig(
                "at least one section is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.sections {
            if !seen.insert(entry.id) {
                return Err(SiteError::InvalidConfig(format!(
                    "section '{}' listed more than once",
                    entry.id
                )));
            }
        }

        let offset = self.timings.scroll_probe_offset;
        if !offset.is_finite() || offset < 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "scroll_probe_offset must be a non-negative number, got {}",
                offset
            )));
        }

        if let Some(index) = self
            .companies
            .entries
            .iter()
            .position(|c| c.name.trim().is_empty())
        {
            return Err(SiteError::InvalidConfig(format!(
                "company #{} has no name",
                index + 1
            )));
        }

        Ok(())
    }

    /// Section ids in navigation (and scroll tracking) order.
    pub fn section_order(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let config = SiteConfig::default();
        assert_eq!(config.section_order(), SectionId::all().to_vec());
        assert_eq!(config.companies.entries.len(), 3);
        assert_eq!(config.timings.loading_delay(), Duration::from_millis(2000));
        assert_eq!(config.timings.submit_latency(), Duration::from_millis(1500));
        assert_eq!(config.timings.reset_delay(), Duration::from_millis(3000));
        assert_eq!(config.timings.scroll_probe_offset, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "identity": { "owner": "Ana" }, "timings": { "reset_delay_ms": 10 } }"#,
        )
        .unwrap();
        assert_eq!(config.identity.owner, "Ana");
        assert_eq!(config.identity.site_title, Identity::default().site_title);
        assert_eq!(config.timings.reset_delay_ms, 10);
        assert_eq!(config.timings.submit_latency_ms, 1500);
        assert_eq!(config.sections.len(), 5);
    }

    #[test]
    fn custom_section_order() {
        let config = SiteConfig::from_json(
            r#"{ "sections": [
                { "id": "contact", "label": "Fale", "icon": "message-circle" },
                { "id": "home", "label": "Topo", "icon": "user" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(
            config.section_order(),
            vec![SectionId::Contact, SectionId::Home]
        );
    }

    #[test]
    fn rejects_duplicate_sections() {
        let mut config = SiteConfig::default();
        config.sections.push(config.sections[0].clone());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(ref m) if m.contains("home")));
    }

    #[test]
    fn rejects_empty_sections() {
        let err = SiteConfig::from_json(r#"{ "sections": [] }"#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unknown_section_id() {
        let err = SiteConfig::from_json(
            r#"{ "sections": [{ "id": "blog", "label": "Blog", "icon": "user" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::Serialization(_)));
    }

    #[test]
    fn rejects_negative_probe_offset() {
        let mut config = SiteConfig::default();
        config.timings.scroll_probe_offset = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_nameless_company() {
        let mut config = SiteConfig::default();
        config.companies.entries[1].name = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(ref m) if m.contains("#2")));
    }

    #[test]
    fn pretty_json_parses_back() {
        let config = SiteConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(SiteConfig::from_json(&json).unwrap(), config);
    }
}
