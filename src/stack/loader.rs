// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use ndarray::Array3;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::ColorType;

use crate::observability::messages::stack::{PageDecoded, StackLoadFailed, StackLoadStarted, StackLoaded};
use crate::observability::messages::StructuredLog;
use crate::stack::error::{StackError, StackResult};
use crate::stack::image_stack::{ImageStack, SampleFormat};

/// Load a multi-page TIFF as a `(frames, height, width)` stack.
///
/// Every image directory in the file becomes one frame, in file order. Pages must be
/// single-channel grayscale and share the dimensions of the first page. Samples of
/// any integer or float width are widened to `f64`.
pub fn load_tiff_stack<P: AsRef<Path>>(path: P) -> StackResult<ImageStack> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    let start_msg = StackLoadStarted {
        path: &display_path,
    };
    let span = start_msg.span("load_tiff_stack");
    let _guard = span.enter();
    start_msg.log();

    let start_time = Instant::now();
    let result = File::open(path)
        .map_err(StackError::from)
        .and_then(|file| decode_pages(BufReader::new(file)));

    match result {
        Ok(stack) => {
            let (frames, height, width) = stack.shape();
            StackLoaded {
                path: &display_path,
                frames,
                height,
                width,
                sample_format: stack.sample_format().as_str(),
                integer_samples: stack.sample_format().is_integer(),
                duration: start_time.elapsed(),
            }
            .log();
            Ok(stack)
        }
        Err(error) => {
            StackLoadFailed {
                path: &display_path,
                error: &error,
            }
            .log();
            Err(error)
        }
    }
}

/// Decode every page from an already opened TIFF source.
pub fn decode_pages<R>(reader: R) -> StackResult<ImageStack>
where
    R: std::io::Read + std::io::Seek,
{
    let mut decoder = Decoder::new(reader)?;
    let mut samples: Vec<f64> = Vec::new();
    let mut dimensions: Option<(usize, usize)> = None;
    let mut sample_format: Option<SampleFormat> = None;
    let mut page = 0usize;

    loop {
        let color_type = decoder.colortype()?;
        if !matches!(color_type, ColorType::Gray(_)) {
            return Err(StackError::UnsupportedColorType {
                page,
                color_type: format!("{:?}", color_type),
            });
        }

        let (width, height) = decoder.dimensions()?;
        let (w, h) = (width as usize, height as usize);
        match dimensions {
            None => dimensions = Some((w, h)),
            Some((expected_width, expected_height)) if (expected_width, expected_height) != (w, h) => {
                return Err(StackError::DimensionMismatch {
                    page,
                    expected_width,
                    expected_height,
                    found_width: w,
                    found_height: h,
                });
            }
            Some(_) => {}
        }

        let (format, count) = append_samples(decoder.read_image()?, &mut samples);
        if count != w * h {
            return Err(StackError::SampleCountMismatch {
                page,
                expected: w * h,
                found: count,
            });
        }
        sample_format.get_or_insert(format);

        PageDecoded {
            page,
            width,
            height,
        }
        .log();

        page += 1;
        if !decoder.more_images() {
            break;
        }
        decoder.next_image()?;
    }

    let (width, height) = dimensions.ok_or(StackError::Empty)?;
    let data = Array3::from_shape_vec((page, height, width), samples)?;
    ImageStack::new(data, sample_format.unwrap_or(SampleFormat::F64))
}

/// Widen a decoded page into `out`, returning its format and sample count.
fn append_samples(image: DecodingResult, out: &mut Vec<f64>) -> (SampleFormat, usize) {
    fn extend<T: Copy + Into<f64>>(out: &mut Vec<f64>, buf: &[T]) -> usize {
        out.extend(buf.iter().map(|&v| v.into()));
        buf.len()
    }

    match image {
        DecodingResult::U8(buf) => (SampleFormat::U8, extend(out, buf.as_slice())),
        DecodingResult::U16(buf) => (SampleFormat::U16, extend(out, buf.as_slice())),
        DecodingResult::U32(buf) => (SampleFormat::U32, extend(out, buf.as_slice())),
        DecodingResult::U64(buf) => {
            out.extend(buf.iter().map(|&v| v as f64));
            (SampleFormat::U64, buf.len())
        }
        DecodingResult::I8(buf) => (SampleFormat::I8, extend(out, buf.as_slice())),
        DecodingResult::I16(buf) => (SampleFormat::I16, extend(out, buf.as_slice())),
        DecodingResult::I32(buf) => (SampleFormat::I32, extend(out, buf.as_slice())),
        DecodingResult::I64(buf) => {
            out.extend(buf.iter().map(|&v| v as f64));
            (SampleFormat::I64, buf.len())
        }
        DecodingResult::F32(buf) => (SampleFormat::F32, extend(out, buf.as_slice())),
        DecodingResult::F64(buf) => (SampleFormat::F64, extend(out, buf.as_slice())),
    }
}
