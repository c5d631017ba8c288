// src/backend/services/qr_materializer.rs
// Builds one QR code per stamp point for the admin screen

use crate::{
    config::{ErrorCorrection, QrPresentation},
    error::StampError,
    models::{EncodedImage, QrCodeRecord, StampId},
    services::entry_point::POINT_PARAM,
};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use tracing::{debug, warn};

/// Turns a payload string into an image. The external collaborator of the QR screen.
pub trait QrEncoder {
    fn encode(&self, payload: &str) -> Result<EncodedImage, StampError>;
}

/// Default encoder: `qrcode` crate, rendered as SVG.
#[derive(Clone, Debug)]
pub struct SvgQrEncoder {
    ec_level: EcLevel,
    size_px: u32,
}

impl SvgQrEncoder {
    pub fn new(presentation: &QrPresentation) -> Self {
        Self {
            ec_level: match presentation.error_correction {
                ErrorCorrection::L => EcLevel::L,
                ErrorCorrection::M => EcLevel::M,
                ErrorCorrection::Q => EcLevel::Q,
                ErrorCorrection::H => EcLevel::H,
            },
            size_px: presentation.size_px,
        }
    }
}

impl QrEncoder for SvgQrEncoder {
    fn encode(&self, payload: &str) -> Result<EncodedImage, StampError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), self.ec_level)
            .map_err(|e| StampError::EncodingError(format!("{:?}", e)))?;
        let image = code
            .render::<svg::Color>()
            .min_dimensions(self.size_px, self.size_px)
            .quiet_zone(true)
            .build();
        Ok(EncodedImage::new("image/svg+xml", image.into_bytes()))
    }
}

/// The collection URL encoded into the QR code for `id`.
pub fn collection_url(base_url: &str, id: StampId) -> String {
    format!("{}?{}={}", base_url, POINT_PARAM, id)
}

/// Produces QR code records for every stamp point.
pub struct QrMaterializer {
    base_url: String,
    total_stamps: u32,
    encoder: Box<dyn QrEncoder>,
}

impl QrMaterializer {
    pub fn new(base_url: impl Into<String>, total_stamps: u32, encoder: Box<dyn QrEncoder>) -> Self {
        Self {
            base_url: base_url.into(),
            total_stamps,
            encoder,
        }
    }

    /// Encodes ids `1..=N` in order. An id whose encoding fails is logged and
    /// skipped; the rest are still produced.
    pub fn materialize(&self) -> Vec<QrCodeRecord> {
        let records = (1..=self.total_stamps).fold(Vec::new(), |mut records, id| {
            let url = collection_url(&self.base_url, id);
            match self.encoder.encode(&url) {
                Ok(image) => records.push(QrCodeRecord { id, url, image }),
                Err(e) => warn!(id, error = %e, "Failed to generate QR code; skipping"),
            }
            records
        });
        debug!(
            generated = records.len(),
            requested = self.total_stamps,
            "QR codes materialized"
        );
        records
    }
}

impl std::fmt::Debug for QrMaterializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrMaterializer")
            .field("base_url", &self.base_url)
            .field("total_stamps", &self.total_stamps)
            .finish_non_exhaustive()
    }
}
