//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "animebot".to_string()
}

pub fn default_data_dir() -> String {
    "~/.animebot".to_string()
}

pub fn default_language() -> String {
    "fr".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_catalog_base_url() -> String {
    "https://api.jikan.moe/v4".to_string()
}

pub fn default_list_limit() -> usize {
    10
}

pub fn default_translation_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}

pub fn default_translation_target() -> String {
    "fr".to_string()
}

pub fn default_store_path() -> String {
    "~/.animebot/data/user_data.json".to_string()
}
