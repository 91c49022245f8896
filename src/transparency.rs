//! Near-black to transparent conversion for animated GIFs
//!
//! Every frame is decoded to RGBA, pixels whose red, green and blue channels all sit below
//! the threshold become fully transparent, and the sequence is re-encoded with the original
//! per-frame delays and infinite looping.

use crate::error::TransparencyError;
use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, Frame, Rgba, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub fn is_near_black(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r < threshold && g < threshold && b < threshold
}

/// Clear near-black pixels in place, returning how many changed.
pub fn clear_near_black(image: &mut RgbaImage, threshold: u8) -> usize {
    let mut cleared = 0;
    for pixel in image.pixels_mut() {
        if is_near_black(pixel, threshold) {
            *pixel = CLEAR;
            cleared += 1;
        }
    }
    cleared
}

/// Apply [`clear_near_black`] to every frame, keeping offsets and delays.
pub fn process_frames(frames: Vec<Frame>, threshold: u8) -> Vec<Frame> {
    frames
        .into_iter()
        .enumerate()
        .map(|(index, frame)| {
            let (left, top, delay) = (frame.left(), frame.top(), frame.delay());
            let mut buffer = frame.into_buffer();
            let cleared = clear_near_black(&mut buffer, threshold);
            debug!(frame = index, cleared, "cleared near-black pixels");
            Frame::from_parts(buffer, left, top, delay)
        })
        .collect()
}

pub fn decode_gif(bytes: &[u8]) -> Result<Vec<Frame>, TransparencyError> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    Ok(decoder.into_frames().collect_frames()?)
}

pub fn encode_gif(frames: Vec<Frame>) -> Result<Vec<u8>, TransparencyError> {
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        encoder.set_repeat(Repeat::Infinite)?;
        encoder.encode_frames(frames)?;
    }
    Ok(bytes)
}

/// Convert `input`, writing to `output` (or back over `input`). Returns the frame count.
pub fn make_transparent(
    input: &Path,
    output: Option<&Path>,
    threshold: u8,
) -> Result<usize, TransparencyError> {
    let output = output.unwrap_or(input);

    let bytes = fs::read(input).map_err(|source| TransparencyError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let frames = decode_gif(&bytes)?;
    if frames.is_empty() {
        return Err(TransparencyError::NoFrames(input.to_path_buf()));
    }

    let count = frames.len();
    let encoded = encode_gif(process_frames(frames, threshold))?;
    fs::write(output, encoded).map_err(|source| TransparencyError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    info!(frames = count, output = %output.display(), "wrote transparent gif");
    Ok(count)
}
