//! Separable Gaussian blur over a coverage mask.

/// Pixels of padding a blur of standard deviation `sigma` spreads into.
pub fn kernel_radius(sigma: f64) -> usize {
    if sigma > 0.0 && sigma.is_finite() {
        (sigma * 3.0).ceil() as usize
    } else {
        0
    }
}

/// Normalised 1D Gaussian kernel of length `2 * kernel_radius(sigma) + 1`.
pub fn gaussian_kernel(sigma: f64) -> Vec<f32> {
    let radius = kernel_radius(sigma);
    if radius == 0 {
        return vec![1.0];
    }

    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let d = i as f64 - radius as f64;
            (-(d * d) / denom).exp()
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }
    kernel.into_iter().map(|k| k as f32).collect()
}

/// Blur a row-major `width`x`height` mask in place. Values outside the mask
/// count as zero.
pub fn blur_mask(data: &mut [f32], width: usize, height: usize, sigma: f64) {
    let kernel = gaussian_kernel(sigma);
    if kernel.len() == 1 || width == 0 || height == 0 {
        return;
    }
    let radius = kernel.len() / 2;
    let mut scratch = vec![0.0f32; data.len()];

    // Horizontal
    for y in 0..height {
        let row = &data[y * width..(y + 1) * width];
        for x in 0..width {
            scratch[y * width + x] = convolve(&kernel, radius, x, width, |i| row[i]);
        }
    }

    // Vertical
    for x in 0..width {
        for y in 0..height {
            data[y * width + x] = convolve(&kernel, radius, y, height, |i| scratch[i * width + x]);
        }
    }
}

fn convolve(
    kernel: &[f32],
    radius: usize,
    centre: usize,
    len: usize,
    sample: impl Fn(usize) -> f32,
) -> f32 {
    let lo = centre.saturating_sub(radius);
    let hi = (centre + radius).min(len - 1);
    (lo..=hi)
        .map(|i| kernel[i + radius - centre] * sample(i))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_radius() {
        assert_eq!(kernel_radius(0.0), 0);
        assert_eq!(kernel_radius(-2.0), 0);
        assert_eq!(kernel_radius(2.0), 6);
        assert_eq!(kernel_radius(0.5), 2);
    }

    #[test]
    fn test_kernel_is_normalised_and_symmetric() {
        let kernel = gaussian_kernel(3.0);
        assert_eq!(kernel.len(), 19);
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert_eq!(kernel[0], kernel[18]);
        assert!(kernel[9] > kernel[8]);
    }

    #[test]
    fn test_zero_sigma_is_identity() {
        let mut data = vec![0.0, 1.0, 0.5, 0.25];
        blur_mask(&mut data, 2, 2, 0.0);
        assert_eq!(data, vec![0.0, 1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_blur_spreads_and_conserves() {
        let (w, h) = (21, 21);
        let mut data = vec![0.0f32; w * h];
        data[10 * w + 10] = 1.0;
        blur_mask(&mut data, w, h, 2.0);

        let total: f32 = data.iter().sum();
        assert!((total - 1.0).abs() < 1e-4);
        assert!(data[10 * w + 10] < 1.0);
        assert!(data[10 * w + 12] > 0.0);
        assert!((data[10 * w + 8] - data[10 * w + 12]).abs() < 1e-6);
        assert!((data[8 * w + 10] - data[10 * w + 8]).abs() < 1e-6);
    }
}
