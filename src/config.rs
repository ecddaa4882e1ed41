const DEFAULT_PORT: u16 = 4000;

pub struct Config {
    pub mongodb_uri: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration once at startup from `.env` / the process
    /// environment. A missing `MONGODB_URI` is fatal.
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        let uri = dotenvy::var("MONGODB_URI").expect("MONGODB_URI must be set");
        let port = dotenvy::var("PORT")
            .ok()
            .map(|p| p.parse().expect("PORT must be a number"))
            .unwrap_or(DEFAULT_PORT);
        Self {
            mongodb_uri: uri,
            port,
        }
    }

    pub fn new_mongodb_uri(mongodb_uri: String) -> Self {
        Self {
            mongodb_uri,
            port: DEFAULT_PORT,
        }
    }
}
