use spg_sdk::Navigator;

/// Navigates by printing the share link of the new build.
#[derive(Debug, Clone, Default)]
pub struct PrintNavigator {
    share_base: String,
}

impl PrintNavigator {
    pub fn new(share_base: impl Into<String>) -> Self {
        Self {
            share_base: share_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn share_link(&self, location: &str) -> String {
        format!("{}{}", self.share_base, location)
    }
}

impl Navigator for PrintNavigator {
    fn navigate(&self, location: &str) {
        println!("Share link: {}", self.share_link(location));
    }
}
