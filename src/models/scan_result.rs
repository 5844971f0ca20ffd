use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking one repository, tagged by `status` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScanResult {
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        vulnerabilities: Option<VulnerabilityCount>,
        #[serde(default)]
        details: Vec<VulnerabilityRecord>,
    },
    Error {
        #[serde(default)]
        message: String,
    },
}

impl ScanResult {
    /// A successful scan whose count is the number of records.
    pub fn success(details: Vec<VulnerabilityRecord>) -> Self {
        ScanResult::Success {
            vulnerabilities: Some(VulnerabilityCount::Count(details.len() as i64)),
            details,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ScanResult::Error { message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScanResult::Success { .. })
    }

    /// The count when it is a proper integer. Missing or malformed counts
    /// and error results yield `None`.
    pub fn vulnerability_count(&self) -> Option<i64> {
        match self {
            ScanResult::Success { vulnerabilities: Some(count), .. } => count.as_count(),
            _ => None,
        }
    }

    /// Clean means a successful scan that found nothing. A success with no
    /// count at all is read as zero.
    pub fn is_clean(&self) -> bool {
        match self {
            ScanResult::Success { vulnerabilities: None, .. } => true,
            ScanResult::Success { vulnerabilities: Some(count), .. } => count.as_count() == Some(0),
            ScanResult::Error { .. } => false,
        }
    }
}

/// The `vulnerabilities` field as found in the artifact. Any integer counts,
/// negative ones included; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VulnerabilityCount {
    Count(i64),
    Unparsed(serde_json::Value),
}

impl VulnerabilityCount {
    pub fn as_count(&self) -> Option<i64> {
        match self {
            VulnerabilityCount::Count(n) => Some(*n),
            VulnerabilityCount::Unparsed(_) => None,
        }
    }
}

/// A single vulnerable dependency reported by a source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Free-form label such as "high" or "moderate".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss_score: Option<CvssScore>,
}

impl VulnerabilityRecord {
    pub fn new(package: &str, severity: &str, description: &str, cvss_score: CvssScore) -> Self {
        Self {
            package: Some(package.to_string()),
            severity: Some(severity.to_string()),
            description: Some(description.to_string()),
            cvss_score: Some(cvss_score),
        }
    }
}

/// CVSS score, kept as the source wrote it. Numbers keep their JSON form
/// so `8.0` stays `8.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CvssScore {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for CvssScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvssScore::Number(n) => write!(f, "{}", n),
            CvssScore::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_counts_details() {
        let result = ScanResult::success(vec![VulnerabilityRecord::default(); 3]);
        assert_eq!(result.vulnerability_count(), Some(3));
        assert!(!result.is_clean());
    }

    #[test]
    fn test_clean_only_for_zero_success() {
        assert!(ScanResult::success(Vec::new()).is_clean());
        assert!(!ScanResult::error("boom").is_clean());

        let missing: ScanResult = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(missing.is_clean());
        assert_eq!(missing.vulnerability_count(), None);

        let text: ScanResult =
            serde_json::from_str(r#"{"status":"success","vulnerabilities":"many"}"#).unwrap();
        assert!(!text.is_clean());
        assert_eq!(text.vulnerability_count(), None);
    }

    #[test]
    fn test_error_wire_format() {
        let json = serde_json::to_value(ScanResult::error("Falha ao buscar vulnerabilidades: 404")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "message": "Falha ao buscar vulnerabilidades: 404"})
        );
    }

    #[test]
    fn test_success_wire_format() {
        let record = VulnerabilityRecord::new("lodash", "high", "Prototype pollution", CvssScore::Text("7.4".into()));
        let json = serde_json::to_value(ScanResult::success(vec![record])).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["vulnerabilities"], 1);
        assert_eq!(json["details"][0]["package"], "lodash");
        assert_eq!(json["details"][0]["cvss_score"], "7.4");
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(serde_json::from_str::<ScanResult>(r#"{"status":"pending"}"#).is_err());
    }

    #[test]
    fn test_float_count_is_unparsed() {
        let float: ScanResult =
            serde_json::from_str(r#"{"status":"success","vulnerabilities":2.5}"#).unwrap();
        assert_eq!(float.vulnerability_count(), None);
        assert!(!float.is_clean());
    }

    #[test]
    fn test_negative_count_is_an_integer() {
        let negative: ScanResult =
            serde_json::from_str(r#"{"status":"success","vulnerabilities":-1}"#).unwrap();
        assert_eq!(negative.vulnerability_count(), Some(-1));
        assert!(!negative.is_clean());
    }

    #[test]
    fn test_cvss_display() {
        assert_eq!(CvssScore::Text("8.9".into()).to_string(), "8.9");
        let score: CvssScore = serde_json::from_str("5.4").unwrap();
        assert_eq!(score.to_string(), "5.4");
    }

    #[test]
    fn test_whole_cvss_number_keeps_decimal() {
        let score: CvssScore = serde_json::from_str("8.0").unwrap();
        assert!(matches!(score, CvssScore::Number(_)));
        assert_eq!(score.to_string(), "8.0");
    }
}
