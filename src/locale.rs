//! Localized class names and educational descriptions for diagnosis results.
//!
//! The tables are read-only configuration assets: built once at startup and
//! passed by reference into the interpreter, so tests can substitute their
//! own tables.

use std::collections::HashMap;

/// Canonical class id the classifier uses for a healthy finding.
pub const HEALTHY_CLASS: &str = "healthy";

/// Localized name that marks the healthy/normal sentinel.
pub const HEALTHY_NAME: &str = "정상";

/// Immutable mapping from canonical lowercase class id to localized name and
/// educational description, plus the per-domain no-findings message.
#[derive(Debug, Clone)]
pub struct DiagnosisLocale {
    names: HashMap<String, String>,
    descriptions: HashMap<String, String>,
    healthy_message: String,
}

impl DiagnosisLocale {
    pub fn new(
        names: HashMap<String, String>,
        descriptions: HashMap<String, String>,
        healthy_message: impl Into<String>,
    ) -> Self {
        Self {
            names,
            descriptions,
            healthy_message: healthy_message.into(),
        }
    }

    /// Localized display name for a canonical class id, if the table has one.
    pub fn name_for(&self, class_id: &str) -> Option<&str> {
        self.names.get(class_id).map(String::as_str)
    }

    /// Educational description for a canonical class id; empty if absent.
    pub fn description_for(&self, class_id: &str) -> &str {
        self.descriptions
            .get(class_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The fixed no-abnormal-findings message for this domain.
    pub fn healthy_message(&self) -> &str {
        &self.healthy_message
    }

    /// Stock table for the eye condition model.
    pub fn eye() -> Self {
        let names = [
            ("conjunctivitis", "결막염"),
            ("entropion", "안검내반 (눈꺼풀속말림)"),
            ("eyelid_lump", "눈꺼풀 종괴 (혹)"),
            ("healthy", "정상"),
            ("null", "알 수 없음"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let descriptions = [
            (
                "conjunctivitis",
                "결막염은 눈을 감싸고 있는 투명한 막인 결막에 염증이 생긴 상태를 말합니다.\n\n\
                 ⦿ 주요 특징:\n\
                 - 눈의 충혈 및 부어오름\n\
                 - 눈물, 끈적한 분비물 (눈곱) 증가\n\
                 - 가려움으로 인해 눈을 비비거나 찡그리는 행동\n\n\
                 ⦿ 치료 및 관리:\n\
                 세균, 바이러스, 알레르기 등 원인이 다양하므로 정확한 진단이 중요합니다. \
                 보통 항생제 안약이나 안연고를 처방받아 치료하며, 눈 주변을 깨끗하게 유지해주는 것이 좋습니다.",
            ),
            (
                "entropion",
                "안검내반은 눈꺼풀이 안쪽으로 말려 들어가 속눈썹이 각막을 지속적으로 자극하는 상태입니다.\n\n\
                 ⦿ 주요 특징:\n\
                 - 눈물을 자주 흘리거나 눈 주변이 젖어 있음\n\
                 - 눈을 제대로 뜨지 못하고 찡그림\n\
                 - 각막 손상으로 인한 통증 및 충혈\n\n\
                 ⦿ 치료 및 관리:\n\
                 주로 유전적 요인으로 발생하며, 물리적인 문제이므로 수술적 교정이 필요한 경우가 대부분입니다. \
                 방치할 경우 각막 궤양 등 심각한 합병증으로 이어질 수 있어 조기 치료가 중요합니다.",
            ),
            (
                "eyelid_lump",
                "눈꺼풀 종괴는 눈꺼풀에 생긴 모든 종류의 덩어리나 혹을 통칭하는 말입니다. \
                 특정 질병이 아닌, 증상을 설명하는 용어입니다.\n\n\
                 ⦿ 주요 특징:\n\
                 - 눈꺼풀에 작은 뾰루지나 큰 덩어리가 만져짐\n\
                 - 크기나 색상은 매우 다양함\n\n\
                 ⦿ 종류 및 관리:\n\
                 단순한 다래끼, 콩다래끼부터 양성 종양, 악성 종양까지 가능성이 매우 다양합니다.\n\
                 덩어리의 원인을 파악하는 것이 매우 중요하므로, 반드시 동물병원에 방문하여 정확한 진단을 받아야 합니다. \
                 필요한 경우 조직 검사를 진행할 수 있습니다.",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self::new(
            names,
            descriptions,
            "✅ 분석 결과, 특별한 이상 소견이 발견되지 않았습니다. 눈이 건강해 보입니다.",
        )
    }

    /// Stock table for the skin condition model.
    pub fn skin() -> Self {
        let names = [
            ("bacterial dermatosis", "세균성 피부염"),
            ("fungal infection", "곰팡이성 감염"),
            ("healthy", "정상"),
            (
                "hypersensitivity dermatitis",
                "과민성 피부염 (알레르기성 피부염)",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let descriptions = [
            (
                "bacterial dermatosis",
                "세균성 피부염은 피부에 세균이 과도하게 증식하여 발생하는 염증성 질환입니다.\n\n\
                 ⦿ 주요 특징:\n\
                 - 피부가 붉어지고 가려움증, 농포 (고름집) 형성\n\
                 - 딱지, 비듬, 탈모, 악취 동반\n\
                 - 지속적으로 긁거나 핥는 행동\n\n\
                 ⦿ 치료 및 관리:\n\
                 항생제 복용 및 약용 샴푸를 이용한 목욕이 주요 치료법입니다. \
                 근본적인 원인(알레르기, 호르몬 문제 등)을 찾아 함께 치료하는 것이 중요합니다.",
            ),
            (
                "fungal infection",
                "곰팡이성 감염(백선)은 피부사상균이라는 곰팡이에 감염되어 발생하는 피부병입니다. \
                 전염성이 매우 강합니다.\n\n\
                 ⦿ 주요 특징:\n\
                 - 원형 또는 불규칙한 탈모 부위\n\
                 - 각질, 딱지, 붉은 발진\n\
                 - 심한 가려움증을 유발할 수 있으며, 다른 동물이나 사람에게도 전파 가능\n\n\
                 ⦿ 치료 및 관리:\n\
                 항진균제 연고, 약용 샴푸, 또는 경구용 약물을 사용합니다. \
                 완치까지 시간이 걸릴 수 있으며, 환경 소독을 철저히 하여 재감염을 막아야 합니다.",
            ),
            (
                "hypersensitivity dermatitis",
                "과민성 피부염(알레르기성 피부염)은 특정 알레르겐에 대한 과민 반응으로 인해 발생하는 피부 염증입니다.\n\n\
                 ⦿ 주요 특징:\n\
                 - 극심한 가려움증 (특히 귀, 발, 배, 겨드랑이 등)\n\
                 - 긁거나 핥아서 생긴 붉은 발진, 염증, 탈모\n\
                 - 피부가 두꺼워지거나 색소침착이 발생할 수 있음\n\n\
                 ⦿ 치료 및 관리:\n\
                 알레르겐을 파악하고 회피하는 것이 가장 중요합니다. \
                 증상 완화를 위해 항히스타민제, 스테로이드, 면역억제제 등을 사용할 수 있으며, \
                 피부 보습과 관리에 신경 써야 합니다.",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self::new(
            names,
            descriptions,
            "✅ 분석 결과, 특별한 이상 소견이 발견되지 않았습니다. 피부가 건강해 보입니다.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_table_maps_known_classes() {
        let locale = DiagnosisLocale::eye();
        assert_eq!(locale.name_for("conjunctivitis"), Some("결막염"));
        assert_eq!(locale.name_for("healthy"), Some(HEALTHY_NAME));
        assert_eq!(locale.name_for("cataract"), None);
    }

    #[test]
    fn skin_table_keys_are_lowercase_with_spaces() {
        let locale = DiagnosisLocale::skin();
        assert_eq!(locale.name_for("bacterial dermatosis"), Some("세균성 피부염"));
        assert_eq!(
            locale.name_for("hypersensitivity dermatitis"),
            Some("과민성 피부염 (알레르기성 피부염)")
        );
    }

    #[test]
    fn healthy_class_has_no_description() {
        let eye = DiagnosisLocale::eye();
        assert_eq!(eye.description_for("healthy"), "");
        assert!(!eye.description_for("conjunctivitis").is_empty());
    }

    #[test]
    fn healthy_messages_differ_per_domain() {
        assert_ne!(
            DiagnosisLocale::eye().healthy_message(),
            DiagnosisLocale::skin().healthy_message()
        );
    }
}
