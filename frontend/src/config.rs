use thiserror::Error;

/// Where every contact form message ends up.
pub const CONTACT_EMAIL: &str = "zahra_steel@hotmail.com";

pub const PHONE_NUMBERS: [&str; 3] = ["06-5369255", "050-4284908", "055-9974813"];

pub const ADDRESS: &str = "Al Sajaa, Emirates Industrial City, Sharjah";

pub const MAPS_LINK: &str = "https://www.google.com/maps/place/Najmat+Al+Zahra+Steel/@25.3433831,55.6332345,17z";

pub const MAPS_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3606.849668741916!2d55.6332345!3d25.3433831!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3ef5f36f49f5c267:0x83c6f47bf6f50148!2sNajmat%20Al%20Zahra%20Steel!5e0!3m2!1sen!2sae";

/// (label, fragment) pairs, in page order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "hero"),
    ("About", "about"),
    ("Services", "services"),
    ("Clients", "clients"),
    ("Contact", "contact"),
];

/// A section counts as active once its top is within this many pixels of the viewport top.
pub const NAV_ACTIVATION_LEAD: f64 = 120.0;

pub const CAROUSEL_INTERVAL_MS: u32 = 3000;
pub const CAROUSEL_HOLD_MS: u32 = 300;

/// Upper bound on a single EmailJS request.
pub const DELIVERY_TIMEOUT_MS: u32 = 15_000;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[cfg(debug_assertions)]
pub fn get_emailjs_url() -> &'static str {
    // local builds can point at a mock server
    option_env!("EMAILJS_API_URL").unwrap_or(EMAILJS_SEND_URL)
}

#[cfg(not(debug_assertions))]
pub fn get_emailjs_url() -> &'static str {
    EMAILJS_SEND_URL
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// EmailJS credentials, baked in at build time from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let required = |value: Option<&str>, name: &'static str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or(ConfigError::Missing(name))
        };

        Ok(Self {
            service_id: required(service_id, "EMAILJS_SERVICE_ID")?,
            template_id: required(template_id, "EMAILJS_TEMPLATE_ID")?,
            public_key: required(public_key, "EMAILJS_PUBLIC_KEY")?,
        })
    }
}
