//! Documentation theme: branding and links shared by every docs page.

use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub icon: &'static str,
    pub logo_text: &'static str,
    pub project_link: &'static str,
    pub footer_content: &'static str,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            icon: "https://prezel.app/icon.svg",
            logo_text: "prezel",
            project_link: "https://github.com/ricopinazo/prezel",
            footer_content: "prezel docs",
        }
    }
}
