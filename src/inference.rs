use image::DynamicImage;
use log::info;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tract_onnx::prelude::*;

/// Model input edge, fixed by the trained network: 224x224 RGB, NHWC.
const INPUT_SIZE: u32 = 224;

#[derive(Debug)]
pub enum ClassifyError {
    /// The uploaded bytes are not a decodable image.
    InvalidImage(image::ImageError),
    Inference(String),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::InvalidImage(e) => write!(f, "invalid image: {}", e),
            ClassifyError::Inference(e) => write!(f, "inference failed: {}", e),
        }
    }
}

impl std::error::Error for ClassifyError {}

#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Io(std::io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "model download failed: {}", e),
            FetchError::Io(e) => write!(f, "could not write model file: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Download the model artifact to `path`. Called once at startup when the
/// file is absent.
pub async fn fetch_model(path: &Path, url: &str) -> Result<(), FetchError> {
    info!("Model file {} missing, downloading from {}", path.display(), url);
    let bytes = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(FetchError::Http)?
        .bytes()
        .await
        .map_err(FetchError::Http)?;
    tokio::fs::write(path, &bytes).await.map_err(FetchError::Io)?;
    info!("Model downloaded ({} bytes)", bytes.len());
    Ok(())
}

/// Wraps the pre-trained plant disease network: fixed preprocessing, one
/// forward pass, arg-max decode against the class index table.
pub struct LeafClassifier {
    model: TypedSimplePlan<TypedModel>,
    class_indices: HashMap<String, String>,
}

impl LeafClassifier {
    pub fn load(
        path: &Path,
        class_indices: HashMap<String, String>,
    ) -> TractResult<Self> {
        let model = tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(
                0,
                f32::fact([1, INPUT_SIZE as usize, INPUT_SIZE as usize, 3]).into(),
            )?
            .into_optimized()?
            .into_runnable()?;
        info!("Loaded classifier from {}", path.display());
        Ok(LeafClassifier { model, class_indices })
    }

    pub fn classify(&self, image_bytes: &[u8]) -> Result<String, ClassifyError> {
        let image = image::load_from_memory(image_bytes).map_err(ClassifyError::InvalidImage)?;
        let input: Tensor = preprocess(&image).into();
        let result = self
            .model
            .run(tvec!(input.into()))
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;
        let scores: Vec<f32> = result[0]
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::Inference(e.to_string()))?
            .iter()
            .cloned()
            .collect();
        Ok(decode_label(&scores, &self.class_indices))
    }
}

/// Resize to 224x224 (aspect ratio not preserved), scale to [0, 1], add the
/// batch axis. NHWC, as the network was trained.
pub fn preprocess(image: &DynamicImage) -> tract_ndarray::Array4<f32> {
    let resized = image::imageops::resize(
        &image.to_rgb8(),
        INPUT_SIZE,
        INPUT_SIZE,
        image::imageops::FilterType::Triangle,
    );
    tract_ndarray::Array4::from_shape_fn(
        (1, INPUT_SIZE as usize, INPUT_SIZE as usize, 3),
        |(_, y, x, c)| resized[(x as u32, y as u32)][c] as f32 / 255.0,
    )
}

/// Arg-max over the output vector, then the class index table; indices the
/// table does not know map to "Unknown".
pub fn decode_label(scores: &[f32], class_indices: &HashMap<String, String>) -> String {
    let best = scores
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, _)| index);
    match best {
        Some(index) => class_indices
            .get(&index.to_string())
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string()),
        None => "Unknown".to_string(),
    }
}
