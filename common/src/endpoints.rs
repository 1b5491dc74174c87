//! URLs of the reports backend.

use crate::navigation::encode_component;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEndpoints {
    api_base: String,
    public_base: String,
}

impl ReportEndpoints {
    /// `api_base` is the `/api` root of the backend; `public_base` is the root the public
    /// report view is reachable under from other devices (QR codes point there).
    pub fn new(api_base: &str, public_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }

    /// `GET` lists reports, `POST` creates one.
    pub fn reports(&self) -> String {
        format!("{}/reports", self.api_base)
    }

    /// `GET`, `PUT` and `DELETE` a single report.
    pub fn by_serial(&self, serial: &str) -> String {
        format!("{}/reports/serial/{}", self.api_base, encode_component(serial))
    }

    pub fn upload(&self, serial: &str) -> String {
        format!("{}/upload", self.by_serial(serial))
    }

    pub fn qr(&self, serial: &str) -> String {
        format!("{}/qr", self.by_serial(serial))
    }

    pub fn export(&self, id: i64) -> String {
        format!("{}/reports/{}/export", self.api_base, id)
    }

    pub fn public_view(&self, serial: &str) -> String {
        format!("{}/view/{}", self.public_base, encode_component(serial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> ReportEndpoints {
        ReportEndpoints::new("http://localhost:8000/api/", "http://10.0.0.5:8000/api")
    }

    #[test]
    fn builds_every_report_route() {
        let e = endpoints();
        assert_eq!(e.reports(), "http://localhost:8000/api/reports");
        assert_eq!(e.by_serial("R1001"), "http://localhost:8000/api/reports/serial/R1001");
        assert_eq!(
            e.upload("R1001"),
            "http://localhost:8000/api/reports/serial/R1001/upload"
        );
        assert_eq!(e.qr("R1001"), "http://localhost:8000/api/reports/serial/R1001/qr");
        assert_eq!(e.export(42), "http://localhost:8000/api/reports/42/export");
        assert_eq!(e.public_view("R1001"), "http://10.0.0.5:8000/api/view/R1001");
    }

    #[test]
    fn serial_is_encoded_as_a_single_segment() {
        assert_eq!(
            endpoints().by_serial("R 1/2"),
            "http://localhost:8000/api/reports/serial/R%201%2F2"
        );
    }
}
