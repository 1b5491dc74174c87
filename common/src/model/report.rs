use serde::{Deserialize, Serialize};

use super::fields::FormFields;

/// `name` attributes of the report form, in display order.
pub const REPORT_FIELDS: [&str; 16] = [
    "uhid",
    "sl_no",
    "reg_no",
    "patient_no",
    "patient_name",
    "report_date",
    "age_sex",
    "origin_ethe",
    "ref_by",
    "film_no",
    "scan_time",
    "report_time",
    "tat",
    "scan_type",
    "doctor_description",
    "impression",
];

/// Body of `POST /api/reports` and `PUT /api/reports/serial/{serial}`.
///
/// Only `patient_name` is mandatory; absent optional fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub patient_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uhid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_ethe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impression: Option<String>,
}

impl ReportDraft {
    /// Builds a draft from already-validated fields; `patient_name` is the trimmed value.
    pub fn from_fields(patient_name: &str, fields: &FormFields) -> Self {
        Self {
            patient_name: patient_name.to_string(),
            uhid: fields.take("uhid"),
            sl_no: fields.take("sl_no"),
            reg_no: fields.take("reg_no"),
            patient_no: fields.take("patient_no"),
            report_date: fields.take("report_date"),
            age_sex: fields.take("age_sex"),
            origin_ethe: fields.take("origin_ethe"),
            ref_by: fields.take("ref_by"),
            film_no: fields.take("film_no"),
            scan_time: fields.take("scan_time"),
            report_time: fields.take("report_time"),
            tat: fields.take("tat"),
            scan_type: fields.take("scan_type"),
            doctor_description: fields.take("doctor_description"),
            impression: fields.take("impression"),
        }
    }
}

/// Full record returned by `GET /api/reports/serial/{serial}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Report {
    pub id: i64,
    pub serial_number: String,
    pub patient_name: String,
    pub uhid: Option<String>,
    pub sl_no: Option<String>,
    pub reg_no: Option<String>,
    pub patient_no: Option<String>,
    pub report_date: Option<String>,
    pub age_sex: Option<String>,
    pub origin_ethe: Option<String>,
    pub ref_by: Option<String>,
    pub film_no: Option<String>,
    pub scan_time: Option<String>,
    pub report_time: Option<String>,
    pub tat: Option<String>,
    pub scan_type: Option<String>,
    pub doctor_description: Option<String>,
    pub impression: Option<String>,
}

impl Report {
    /// Value to put in the input named `field`; unknown fields and missing values are empty.
    pub fn field_value(&self, field: &str) -> String {
        let value = match field {
            "patient_name" => return self.patient_name.clone(),
            "uhid" => &self.uhid,
            "sl_no" => &self.sl_no,
            "reg_no" => &self.reg_no,
            "patient_no" => &self.patient_no,
            "report_date" => &self.report_date,
            "age_sex" => &self.age_sex,
            "origin_ethe" => &self.origin_ethe,
            "ref_by" => &self.ref_by,
            "film_no" => &self.film_no,
            "scan_time" => &self.scan_time,
            "report_time" => &self.report_time,
            "tat" => &self.tat,
            "scan_type" => &self.scan_type,
            "doctor_description" => &self.doctor_description,
            "impression" => &self.impression,
            _ => return String::new(),
        };
        value.clone().unwrap_or_default()
    }
}

/// One row of `GET /api/reports`, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportSummary {
    pub id: i64,
    pub serial_number: String,
    pub patient_name: String,
    pub uhid: Option<String>,
    pub patient_no: Option<String>,
    pub report_date: Option<String>,
    pub age_sex: Option<String>,
    pub scan_type: Option<String>,
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draft_omits_missing_optional_fields() {
        let fields: FormFields = [("patient_name", "Ana"), ("scan_type", "CT")]
            .into_iter()
            .collect();
        let draft = ReportDraft::from_fields("Ana", &fields);
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({ "patient_name": "Ana", "scan_type": "CT" })
        );
    }

    #[test]
    fn report_field_values_fill_missing_with_empty() {
        let report: Report = serde_json::from_value(json!({
            "id": 3,
            "serial_number": "R1003",
            "patient_name": "Ana",
            "uhid": "U-1",
            "sl_no": null,
            "reg_no": null,
            "patient_no": null,
            "report_date": "2026-10-01",
            "age_sex": null,
            "origin_ethe": null,
            "ref_by": null,
            "film_no": null,
            "scan_time": null,
            "report_time": null,
            "tat": null,
            "scan_type": null,
            "doctor_description": null,
            "impression": "Normal study"
        }))
        .unwrap();

        assert_eq!(report.field_value("patient_name"), "Ana");
        assert_eq!(report.field_value("report_date"), "2026-10-01");
        assert_eq!(report.field_value("impression"), "Normal study");
        assert_eq!(report.field_value("ref_by"), "");
        assert_eq!(report.field_value("not_a_field"), "");
    }

    #[test]
    fn every_form_field_maps_to_a_report_attribute() {
        let report: Report = serde_json::from_value(json!({
            "id": 1, "serial_number": "R1", "patient_name": "P",
            "uhid": "a", "sl_no": "a", "reg_no": "a", "patient_no": "a",
            "report_date": "a", "age_sex": "a", "origin_ethe": "a", "ref_by": "a",
            "film_no": "a", "scan_time": "a", "report_time": "a", "tat": "a",
            "scan_type": "a", "doctor_description": "a", "impression": "a"
        }))
        .unwrap();
        for field in REPORT_FIELDS {
            assert!(!report.field_value(field).is_empty(), "{field} not mapped");
        }
    }
}
