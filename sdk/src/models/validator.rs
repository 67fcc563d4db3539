use serde_derive::{Deserialize, Serialize};

use crate::{
    models::config::StakeConfig,
    utils::helpers::{get_explorer_url, shorten_address},
};

/// Display data for the validator stake is delegated to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorInfo {
    pub name: String,
    pub vote_account: String,
    pub short_vote_account: String,
    pub explorer_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl ValidatorInfo {
    pub fn from_config(config: &StakeConfig) -> Self {
        let vote_account = config.validator_address.to_string();
        Self {
            name: config.validator_name.clone(),
            logo_url: config.validator_logo_url.clone(),
            short_vote_account: shorten_address(&vote_account),
            explorer_url: get_explorer_url(&config.explorer_base_url, &vote_account),
            vote_account,
        }
    }

    /// Renders the validator card as a static HTML fragment.
    pub fn to_html(&self) -> String {
        let logo = match &self.logo_url {
            Some(logo_url) => format!(
                "<img class=\"validator-logo\" src=\"{}\" alt=\"{} Logo\" width=\"40\" height=\"40\">",
                escape_html(logo_url),
                escape_html(&self.name),
            ),
            None => String::new(),
        };
        format!(
            concat!(
                "<div class=\"validator-card\">",
                "<span class=\"validator-card-title\">Validator</span>",
                "<div class=\"validator-card-body\">",
                "{logo}",
                "<span class=\"validator-name\">{name}</span>",
                "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">",
                "Vote Account: {short}",
                "</a>",
                "</div>",
                "</div>"
            ),
            logo = logo,
            name = escape_html(&self.name),
            url = escape_html(&self.explorer_url),
            short = escape_html(&self.short_vote_account),
        )
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn test_validator_info_from_config() {
        let vote = Pubkey::new_unique();
        let config = StakeConfig::new(vote);
        let info = ValidatorInfo::from_config(&config);

        let vote_str = vote.to_string();
        assert_eq!(info.name, "ZeroVentures");
        assert_eq!(info.vote_account, vote_str);
        assert!(info.short_vote_account.starts_with(&vote_str[..4]));
        assert!(info.short_vote_account.ends_with(&vote_str[vote_str.len() - 4..]));
        assert_eq!(
            info.explorer_url,
            format!("https://stakewiz.com/validator/{vote_str}")
        );
    }

    #[test]
    fn test_html_card_links_to_explorer() {
        let mut config = StakeConfig::new(Pubkey::new_unique());
        config.validator_name = "Tom & Jerry <Validators>".to_string();
        let info = ValidatorInfo::from_config(&config);
        let html = info.to_html();

        assert!(html.contains(&format!("href=\"{}\"", info.explorer_url)));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains(&format!("Vote Account: {}", info.short_vote_account)));
        assert!(html.contains("Tom &amp; Jerry &lt;Validators&gt;"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_card_shows_validator_address_not_vote_address() {
        let mut config = StakeConfig::new(Pubkey::new_unique());
        config.validator_address = Pubkey::new_unique();
        let info = ValidatorInfo::from_config(&config);

        let address = config.validator_address.to_string();
        assert_eq!(info.vote_account, address);
        assert_eq!(info.short_vote_account, shorten_address(&address));
        assert!(info.explorer_url.ends_with(&address));
        assert!(!info
            .explorer_url
            .contains(&config.validator_vote_address.to_string()));
    }

    #[test]
    fn test_html_card_renders_logo() {
        let mut config = StakeConfig::new(Pubkey::new_unique());
        config.validator_logo_url = Some("/quicknode.svg".to_string());
        let html = ValidatorInfo::from_config(&config).to_html();

        assert!(html.contains("<img class=\"validator-logo\" src=\"/quicknode.svg\""));
        assert!(html.contains("alt=\"ZeroVentures Logo\""));
    }
}
