pub mod errors;
pub mod models;

use std::time::Duration;
use log::{debug, info};
use reqwest::blocking::Client;
use crate::config::Source;
use crate::manager_climate::errors::ClimateError;
use crate::manager_climate::models::RawResponse;

/// World Bank climate API, CRU mean annual surface temperature for Canada
pub const DEFAULT_URL: &str = "http://climatedataapi.worldbank.org/climateweb/rest/v1/country/cru/tas/year/CAN.csv";

/// Anything that can hand over one raw climate series document
pub trait SeriesSource {
    fn fetch(&self) -> Result<RawResponse, ClimateError>;
}

/// Client for the climate data API
pub struct ClimateApi {
    client: Client,
    url: String,
}

impl ClimateApi {
    /// Returns a new instance of the ClimateApi struct
    ///
    /// # Arguments
    ///
    /// * 'config' - source configuration, url and optional timeout
    pub fn new(config: &Source) -> Result<Self, ClimateError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| ClimateError::Client(e.to_string()))?;

        Ok(Self { client, url: config.url.clone() })
    }
}

impl SeriesSource for ClimateApi {
    /// Issues a single GET against the configured url.
    /// A response is returned whatever its status, only transport failures are errors.
    fn fetch(&self) -> Result<RawResponse, ClimateError> {
        debug!("requesting {}", self.url);

        let response = self.client
            .get(&self.url)
            .send()?;

        let status = response.status().as_u16();
        info!("climate api responded with status {}", status);

        let body = response.text()?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use super::*;

    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line, body.len(), body);
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}/climateweb/rest/v1/country/cru/tas/year/CAN.csv", addr)
    }

    fn api(url: String) -> ClimateApi {
        ClimateApi::new(&Source { url, timeout_secs: Some(10) }).unwrap()
    }

    #[test]
    fn returns_status_and_body() {
        let url = serve_once("200 OK", "year,data\n1901,-7.67\n");
        let response = api(url).fetch().unwrap();
        assert!(response.is_ok());
        assert_eq!(response.body, "year,data\n1901,-7.67\n");
    }

    #[test]
    fn non_200_is_not_an_error() {
        let url = serve_once("404 Not Found", "");
        let response = api(url).fetch().unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.is_ok());
    }

    #[test]
    fn connection_refused_is_network_error() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let result = api(format!("http://{}/", addr)).fetch();
        assert!(matches!(result, Err(ClimateError::Network(_))));
    }
}
