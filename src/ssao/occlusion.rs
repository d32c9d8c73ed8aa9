use crate::error::{GradingError, Result};

/// Reference SSAO occlusion for one pixel.
///
/// A sample occludes when it is in front of the center point but no further
/// than `radius` from it: `0 < center_depth - sample_depth <= radius`.
/// Returns `1 - occluded / sample_count` in [0, 1]; 1 is fully unoccluded.
///
/// Only the first `sample_count` depths are considered.
pub fn calculate_ssao_occlusion(
    sample_depths: &[f32],
    center_depth: f32,
    radius: f32,
    sample_count: usize,
) -> Result<f32> {
    if sample_count == 0 {
        return Err(GradingError::InvalidArgument(
            "SSAO occlusion needs at least one sample".to_string(),
        ));
    }
    if sample_depths.len() < sample_count {
        return Err(GradingError::InvalidArgument(format!(
            "expected {} sample depths, got {}",
            sample_count,
            sample_depths.len()
        )));
    }

    let occluded = sample_depths[..sample_count]
        .iter()
        .filter(|&&depth| {
            let depth_diff = center_depth - depth;
            depth_diff > 0.0 && depth_diff <= radius
        })
        .count();

    Ok((1.0 - occluded as f32 / sample_count as f32).clamp(0.0, 1.0))
}
