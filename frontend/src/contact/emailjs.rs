use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use serde::Serialize;

use super::controller::{DeliveryError, DeliveryRequest, Mailer, TemplateParams};
use crate::config;

#[derive(Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

impl<'a> From<&'a DeliveryRequest> for SendBody<'a> {
    fn from(request: &'a DeliveryRequest) -> Self {
        SendBody {
            service_id: &request.config.service_id,
            template_id: &request.config.template_id,
            user_id: &request.config.public_key,
            template_params: &request.params,
        }
    }
}

impl From<gloo_net::Error> for DeliveryError {
    fn from(e: gloo_net::Error) -> Self {
        DeliveryError::Request(e.to_string())
    }
}

/// Sends contact messages through the EmailJS REST API.
pub struct EmailJs {
    url: &'static str,
    timeout_ms: u32,
}

impl Default for EmailJs {
    fn default() -> Self {
        EmailJs {
            url: config::get_emailjs_url(),
            timeout_ms: config::DELIVERY_TIMEOUT_MS,
        }
    }
}

impl EmailJs {
    async fn post(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        let response = Request::post(self.url)
            .json(&SendBody::from(request))?
            .send()
            .await?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected { status, message })
    }
}

#[async_trait(?Send)]
impl Mailer for EmailJs {
    async fn send(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        let post = Box::pin(self.post(request));
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));

        let result = match select(post, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(DeliveryError::TimedOut),
        };

        match &result {
            Ok(()) => info!("Contact message sent for {}", request.params.from_email),
            Err(e) => error!("Contact message failed: {}", e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailJsConfig;
    use serde_json::json;

    #[test]
    fn body_matches_emailjs_shape() {
        let request = DeliveryRequest {
            config: EmailJsConfig {
                service_id: "service_1".into(),
                template_id: "template_1".into(),
                public_key: "public_1".into(),
            },
            params: TemplateParams {
                from_name: "Aisha".into(),
                from_email: "aisha@example.com".into(),
                message: "Fencing quote".into(),
                to_email: "zahra_steel@hotmail.com".into(),
            },
        };

        let body = serde_json::to_value(SendBody::from(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "user_id": "public_1",
                "template_params": {
                    "from_name": "Aisha",
                    "from_email": "aisha@example.com",
                    "message": "Fencing quote",
                    "to_email": "zahra_steel@hotmail.com"
                }
            })
        );
    }
}
