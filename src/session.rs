//! Per-session request orchestration.
//!
//! All remote calls are blocking and must run off the UI's event thread; the
//! UI disables the triggering action while one request is outstanding. That
//! busy flag is modeled here as an explicit two-state machine per request
//! kind: Idle → Pending on submit, Pending → Idle on completion, success or
//! failure alike. There is no queue, no retry, and no cancellation — an
//! abandoned in-flight request simply delivers into a dropped channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

use image::DynamicImage;

use crate::chat::{ChatError, ChatGenerate, Transcript};
use crate::diagnose::{ClassifyClient, ResultInterpreter, RoboflowClient};
use crate::image_encode::{encode_jpeg_base64, EncodeError};
use crate::josa::KoreanParticles;
use crate::locale::DiagnosisLocale;
use crate::models::{ChatTurn, DiagnosisOutcome};

/// Shown when diagnosis is triggered with no image selected. Handled locally
/// without any network call.
pub const MISSING_IMAGE_MESSAGE: &str = "⚠️ 사진을 먼저 업로드해주세요.";

/// Lifecycle of one request kind within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Pending,
}

/// One-request-in-flight gate. Atomic so completion may arrive from a
/// worker thread.
#[derive(Debug, Default)]
pub struct RequestGate {
    pending: AtomicBool,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RequestState {
        if self.pending.load(Ordering::Acquire) {
            RequestState::Pending
        } else {
            RequestState::Idle
        }
    }

    /// Idle → Pending. Returns false if a request is already outstanding.
    pub fn try_begin(&self) -> bool {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Pending → Idle, on success or failure.
    pub fn complete(&self) {
        self.pending.store(false, Ordering::Release);
    }
}

/// Run blocking work on a worker thread and deliver the result over a
/// channel. Dropping the receiver abandons the result: the send becomes a
/// no-op, which is the intended behavior for a request that outlives its
/// requesting screen.
pub fn dispatch<T, F>(work: F) -> mpsc::Receiver<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(work());
    });
    rx
}

/// One diagnosis flow: attached image, classifier client, localization
/// tables, and the busy gate.
pub struct DiagnosisSession {
    client: Arc<dyn ClassifyClient + Send + Sync>,
    locale: DiagnosisLocale,
    gate: RequestGate,
    encoded_image: Option<String>,
}

impl DiagnosisSession {
    pub fn new(client: Arc<dyn ClassifyClient + Send + Sync>, locale: DiagnosisLocale) -> Self {
        Self {
            client,
            locale,
            gate: RequestGate::new(),
            encoded_image: None,
        }
    }

    /// Session against the production eye model.
    pub fn eye() -> Self {
        Self::new(Arc::new(RoboflowClient::eye()), DiagnosisLocale::eye())
    }

    /// Session against the production skin model.
    pub fn skin() -> Self {
        Self::new(Arc::new(RoboflowClient::skin()), DiagnosisLocale::skin())
    }

    /// Encode and hold a captured bitmap for the next diagnosis.
    pub fn attach_image(&mut self, image: &DynamicImage) -> Result<(), EncodeError> {
        self.encoded_image = Some(encode_jpeg_base64(image)?);
        Ok(())
    }

    pub fn clear_image(&mut self) {
        self.encoded_image = None;
    }

    pub fn has_image(&self) -> bool {
        self.encoded_image.is_some()
    }

    pub fn state(&self) -> RequestState {
        self.gate.state()
    }

    /// Run one diagnosis. Returns `None` while a previous request is still
    /// pending (the UI trigger is disabled in that state). A missing image
    /// short-circuits locally without entering the pending state.
    pub fn diagnose(&mut self) -> Option<DiagnosisOutcome> {
        let Some(encoded) = self.encoded_image.as_deref() else {
            return Some(DiagnosisOutcome::failure(MISSING_IMAGE_MESSAGE));
        };

        if !self.gate.try_begin() {
            return None;
        }

        let result = self.client.classify(encoded);
        let interpreter = ResultInterpreter::new(&self.locale, &KoreanParticles);
        let outcome = interpreter.interpret(result);

        self.gate.complete();
        Some(outcome)
    }
}

/// One chat flow: transcript, remote client, and the busy gate.
pub struct ChatSession {
    client: Arc<dyn ChatGenerate + Send + Sync>,
    transcript: Transcript,
    gate: RequestGate,
}

impl ChatSession {
    pub fn new(client: Arc<dyn ChatGenerate + Send + Sync>) -> Self {
        Self {
            client,
            transcript: Transcript::new(),
            gate: RequestGate::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> RequestState {
        self.gate.state()
    }

    /// Send one user utterance and append both turns to the transcript.
    /// Returns `None` while a previous request is still pending. Transport
    /// failures degrade to user-visible reply text; nothing propagates.
    pub fn send(&mut self, user_text: &str) -> Option<&ChatTurn> {
        if !self.gate.try_begin() {
            return None;
        }

        self.transcript.push_user(user_text);
        let reply = match self.client.send(user_text) {
            Ok(reply) => reply,
            Err(ChatError::Api { status, body }) => {
                format!("오류가 발생했습니다: {status}\n응답: {body}")
            }
            Err(e) => format!("인터넷 연결을 확인해주세요. ({e})"),
        };
        self.transcript.push_assistant(reply);

        self.gate.complete();
        self.transcript.turns().last()
    }
}
