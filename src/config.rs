use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub rating_stars: Vec<i16>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://screenz.db?mode=rwc".to_string());

        let rating_stars = parse_stars(
            &std::env::var("RATING_STARS").unwrap_or_else(|_| "1,2,3,4,5".to_string()),
        )
        .context("RATING_STARS")?;

        Ok(Self { database_url, rating_stars })
    }
}

fn parse_stars(raw: &str) -> anyhow::Result<Vec<i16>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i16>().with_context(|| format!("invalid star value {s:?}")))
        .collect()
}
