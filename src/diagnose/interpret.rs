//! Result interpretation — the step between a raw prediction list and the
//! user-facing diagnosis message.
//!
//! Selection policy: one scan, strictly-greater comparison against a maximum
//! initialized below the valid confidence range, so the first element becomes
//! the initial candidate and ties keep the earliest-seen maximum.
//!
//! The healthy class is intentionally collapsed into the same no-findings
//! message as an empty prediction list. Worth revisiting if per-class
//! confidence display for healthy results is ever wanted.

use super::ClassifyError;
use crate::josa::ParticleSelector;
use crate::locale::{DiagnosisLocale, HEALTHY_CLASS, HEALTHY_NAME};
use crate::models::{DiagnosisOutcome, Prediction};

/// Fixed fallback when the classifier response could not be read.
pub const PARSE_FAILED_MESSAGE: &str = "응답 형식을 파싱하는 데 실패했습니다. 다시 시도해주세요.";

/// Closing line of every suspicion message.
pub const VET_DISCLAIMER: &str = "정확한 진단은 반드시 동물병원에서 받아보세요.";

/// Turns a classification result (or its failure) into a [`DiagnosisOutcome`].
///
/// Holds only borrowed, immutable collaborators so one interpreter can be
/// shared per diagnosis domain.
pub struct ResultInterpreter<'a> {
    locale: &'a DiagnosisLocale,
    particles: &'a dyn ParticleSelector,
}

impl<'a> ResultInterpreter<'a> {
    pub fn new(locale: &'a DiagnosisLocale, particles: &'a dyn ParticleSelector) -> Self {
        Self { locale, particles }
    }

    /// Interpret the upstream classification result. Never panics and never
    /// propagates an error: every failure degrades to a user-visible message.
    pub fn interpret(
        &self,
        result: Result<Vec<Prediction>, ClassifyError>,
    ) -> DiagnosisOutcome {
        match result {
            Err(ClassifyError::ResponseParsing(detail)) => {
                tracing::warn!(%detail, "classifier response unreadable");
                DiagnosisOutcome::failure(PARSE_FAILED_MESSAGE)
            }
            Err(ClassifyError::Api { status, body }) => {
                tracing::warn!(status, %body, "classifier rejected request");
                DiagnosisOutcome::failure(format!(
                    "진단 중 오류가 발생했습니다. (코드: {status})"
                ))
            }
            Err(e) => {
                tracing::warn!(error = %e, "classifier unreachable");
                DiagnosisOutcome::failure(format!("인터넷 연결을 확인해주세요. ({e})"))
            }
            Ok(predictions) => self.interpret_predictions(&predictions),
        }
    }

    fn interpret_predictions(&self, predictions: &[Prediction]) -> DiagnosisOutcome {
        let Some(top) = select_top(predictions) else {
            return self.healthy_outcome(HEALTHY_CLASS);
        };

        // Canonical key into the localization tables.
        let class_id = top.class_name.to_lowercase();
        let name = self.locale.name_for(&class_id).unwrap_or(&class_id);

        if name == HEALTHY_NAME {
            return self.healthy_outcome(&class_id);
        }

        let particle = self.particles.select(name);
        let display_message = format!(
            "AI 분석 결과, ‘{name}’{particle} 의심됩니다.\n(신뢰도: {:.1}%)\n\n{VET_DISCLAIMER}",
            top.confidence * 100.0
        );

        DiagnosisOutcome {
            display_message,
            description: self.locale.description_for(&class_id).to_string(),
            top_class: class_id,
        }
    }

    fn healthy_outcome(&self, class_id: &str) -> DiagnosisOutcome {
        DiagnosisOutcome {
            display_message: self.locale.healthy_message().to_string(),
            top_class: class_id.to_string(),
            description: self.locale.description_for(class_id).to_string(),
        }
    }
}

/// Select the prediction with maximum confidence; first occurrence wins ties.
fn select_top(predictions: &[Prediction]) -> Option<&Prediction> {
    let mut top = None;
    let mut max_confidence = -1.0;
    for prediction in predictions {
        if prediction.confidence > max_confidence {
            max_confidence = prediction.confidence;
            top = Some(prediction);
        }
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::josa::KoreanParticles;

    fn pred(class: &str, confidence: f64) -> Prediction {
        Prediction {
            class_name: class.into(),
            confidence,
        }
    }

    fn eye_interpreter(locale: &DiagnosisLocale) -> ResultInterpreter<'_> {
        ResultInterpreter::new(locale, &KoreanParticles)
    }

    // ── selection policy ──

    #[test]
    fn selects_maximum_confidence() {
        let preds = vec![
            pred("healthy", 0.40),
            pred("conjunctivitis", 0.91),
            pred("entropion", 0.55),
        ];
        assert_eq!(select_top(&preds).unwrap().class_name, "conjunctivitis");
    }

    #[test]
    fn tie_keeps_first_occurrence() {
        let preds = vec![pred("entropion", 0.70), pred("conjunctivitis", 0.70)];
        assert_eq!(select_top(&preds).unwrap().class_name, "entropion");
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert!(select_top(&[]).is_none());
    }

    // ── interpretation ──

    #[test]
    fn suspicion_message_embeds_name_confidence_and_disclaimer() {
        let locale = DiagnosisLocale::eye();
        let outcome = eye_interpreter(&locale).interpret(Ok(vec![
            pred("conjunctivitis", 0.91),
            pred("healthy", 0.40),
        ]));

        assert_eq!(outcome.top_class, "conjunctivitis");
        assert!(outcome.display_message.contains("결막염"));
        assert!(outcome.display_message.contains("91.0%"));
        assert!(outcome.display_message.ends_with(VET_DISCLAIMER));
        assert!(outcome.description.contains("결막염"));
    }

    #[test]
    fn confidence_rendered_with_one_decimal() {
        let locale = DiagnosisLocale::eye();
        let outcome =
            eye_interpreter(&locale).interpret(Ok(vec![pred("conjunctivitis", 0.8734)]));
        assert!(outcome.display_message.contains("87.3%"));
    }

    #[test]
    fn empty_predictions_yield_healthy_sentinel() {
        let locale = DiagnosisLocale::eye();
        let outcome = eye_interpreter(&locale).interpret(Ok(vec![]));
        assert_eq!(outcome.top_class, "healthy");
        assert_eq!(outcome.display_message, locale.healthy_message());
        assert_eq!(outcome.description, "");
    }

    #[test]
    fn healthy_prediction_collapses_to_no_findings_message() {
        let locale = DiagnosisLocale::eye();
        let outcome = eye_interpreter(&locale).interpret(Ok(vec![pred("healthy", 0.99)]));
        assert_eq!(outcome.top_class, "healthy");
        assert_eq!(outcome.display_message, locale.healthy_message());
    }

    #[test]
    fn unknown_class_falls_back_to_raw_id() {
        let locale = DiagnosisLocale::eye();
        let outcome = eye_interpreter(&locale).interpret(Ok(vec![pred("Cherry_Eye", 0.80)]));
        assert_eq!(outcome.top_class, "cherry_eye");
        assert!(outcome.display_message.contains("cherry_eye"));
        assert_eq!(outcome.description, "");
    }

    #[test]
    fn class_identifier_is_lowercased() {
        let locale = DiagnosisLocale::eye();
        let outcome =
            eye_interpreter(&locale).interpret(Ok(vec![pred("CONJUNCTIVITIS", 0.80)]));
        assert_eq!(outcome.top_class, "conjunctivitis");
        assert!(outcome.display_message.contains("결막염"));
    }

    #[test]
    fn particle_follows_final_syllable() {
        let locale = DiagnosisLocale::eye();
        // 결막염 carries batchim → 이
        let with_batchim =
            eye_interpreter(&locale).interpret(Ok(vec![pred("conjunctivitis", 0.9)]));
        assert!(with_batchim.display_message.contains("‘결막염’이 의심됩니다"));
        // 눈꺼풀 종괴 (혹) ends in ')' → 가
        let without =
            eye_interpreter(&locale).interpret(Ok(vec![pred("eyelid_lump", 0.9)]));
        assert!(without.display_message.contains("가 의심됩니다"));
    }

    // ── failure semantics ──

    #[test]
    fn transport_error_embeds_status_code() {
        let locale = DiagnosisLocale::eye();
        let outcome = eye_interpreter(&locale).interpret(Err(ClassifyError::Api {
            status: 500,
            body: "server error".into(),
        }));
        assert_eq!(outcome.top_class, "");
        assert!(outcome.display_message.contains("500"));
    }

    #[test]
    fn connectivity_error_embeds_detail() {
        let locale = DiagnosisLocale::eye();
        let outcome = eye_interpreter(&locale)
            .interpret(Err(ClassifyError::Connection("https://detect".into())));
        assert_eq!(outcome.top_class, "");
        assert!(outcome.display_message.contains("인터넷 연결을 확인해주세요"));
        assert!(outcome.display_message.contains("https://detect"));
    }

    #[test]
    fn parse_error_yields_fixed_fallback() {
        let locale = DiagnosisLocale::eye();
        let outcome = eye_interpreter(&locale)
            .interpret(Err(ClassifyError::ResponseParsing("eof".into())));
        assert_eq!(outcome.top_class, "");
        assert_eq!(outcome.display_message, PARSE_FAILED_MESSAGE);
    }

    // ── skin domain ──

    #[test]
    fn skin_classes_resolve_with_spaces_in_key() {
        let locale = DiagnosisLocale::skin();
        let outcome = ResultInterpreter::new(&locale, &KoreanParticles)
            .interpret(Ok(vec![pred("Bacterial Dermatosis", 0.77)]));
        assert_eq!(outcome.top_class, "bacterial dermatosis");
        assert!(outcome.display_message.contains("세균성 피부염"));
        assert!(outcome.display_message.contains("77.0%"));
    }
}
