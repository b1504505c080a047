// SPDX-License-Identifier: MPL-2.0

//! GStreamer preview pipeline
//!
//! `<device source> ! videoconvert ! videoscale ! video/x-raw,format=RGBA ! appsink`
//!
//! Frames are copied out of the mapped buffer (row padding removed) and pushed
//! into a bounded channel. When the UI falls behind the frame is dropped
//! instead of blocking the streaming thread.

use super::types::{BackendError, BackendResult, FrameSender, PreviewFrame};
use crate::constants::{preview, timing};
use gstreamer::prelude::*;
use gstreamer_app::AppSink;
use gstreamer_video::VideoInfo;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, info, warn};

static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Running preview pipeline, stopped when dropped
pub struct PreviewPipeline {
    pipeline: gstreamer::Pipeline,
}

impl PreviewPipeline {
    /// Build and start a preview pipeline for `device`
    pub fn new(device: &gstreamer::Device, frame_sender: FrameSender) -> BackendResult<Self> {
        gstreamer::init().map_err(|e| BackendError::InitializationFailed(e.to_string()))?;

        info!(device = %device.display_name(), "Creating preview pipeline");

        let source = device.create_element(Some("source"))?;
        let convert = gstreamer::ElementFactory::make("videoconvert").build()?;
        let scale = gstreamer::ElementFactory::make("videoscale").build()?;

        let caps = gstreamer::Caps::builder("video/x-raw")
            .field("format", "RGBA")
            .field("width", gstreamer::IntRange::new(1, preview::MAX_WIDTH as i32))
            .field("height", gstreamer::IntRange::new(1, preview::MAX_HEIGHT as i32))
            .field("pixel-aspect-ratio", gstreamer::Fraction::new(1, 1))
            .build();

        let appsink = AppSink::builder().caps(&caps).build();
        appsink.set_property("sync", false);
        appsink.set_property("max-buffers", preview::MAX_BUFFERS);
        appsink.set_property("drop", true);
        appsink.set_property("enable-last-sample", false);
        appsink.set_callbacks(frame_callbacks(frame_sender));

        let pipeline = gstreamer::Pipeline::new();
        pipeline.add_many([&source, &convert, &scale, appsink.upcast_ref()])?;
        gstreamer::Element::link_many([&source, &convert, &scale, appsink.upcast_ref()])?;

        pipeline.set_state(gstreamer::State::Playing)?;
        debug!("Preview pipeline playing");

        Ok(Self { pipeline })
    }

    /// Non-blocking check for an error posted on the pipeline bus
    pub fn poll_error(&self) -> Option<BackendError> {
        let bus = self.pipeline.bus()?;
        let message = bus.pop_filtered(&[gstreamer::MessageType::Error])?;
        match message.view() {
            gstreamer::MessageView::Error(err) => {
                Some(BackendError::Pipeline(err.error().to_string()))
            }
            _ => None,
        }
    }
}

impl Drop for PreviewPipeline {
    fn drop(&mut self) {
        info!("Stopping preview pipeline");
        if let Err(err) = self.pipeline.set_state(gstreamer::State::Null) {
            error!(error = %err, "Failed to stop preview pipeline");
            return;
        }
        let timeout = gstreamer::ClockTime::from_seconds(timing::STOP_TIMEOUT_SECS);
        let (result, _, _) = self.pipeline.state(Some(timeout));
        if let Err(err) = result {
            warn!(error = %err, "Preview pipeline did not reach NULL in time");
        }
    }
}

fn frame_callbacks(mut frame_sender: FrameSender) -> gstreamer_app::AppSinkCallbacks {
    gstreamer_app::AppSinkCallbacks::builder()
        .new_sample(move |appsink| {
            let frame_num = FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);

            let sample = appsink
                .pull_sample()
                .map_err(|_| gstreamer::FlowError::Eos)?;
            let buffer = sample.buffer().ok_or(gstreamer::FlowError::Error)?;
            let caps = sample.caps().ok_or(gstreamer::FlowError::Error)?;
            let video_info = VideoInfo::from_caps(caps).map_err(|e| {
                error!(frame = frame_num, error = ?e, "Failed to read video info");
                gstreamer::FlowError::Error
            })?;
            let map = buffer.map_readable().map_err(|e| {
                error!(frame = frame_num, error = ?e, "Failed to map buffer");
                gstreamer::FlowError::Error
            })?;

            let width = video_info.width();
            let height = video_info.height();
            let stride = video_info.stride()[0] as usize;
            let Some(data) = pack_rgba(map.as_slice(), width, height, stride) else {
                warn!(frame = frame_num, width, height, stride, "Short RGBA buffer, skipping frame");
                return Ok(gstreamer::FlowSuccess::Ok);
            };

            if frame_num % timing::FRAME_LOG_INTERVAL == 0 {
                debug!(frame = frame_num, width, height, "Preview frame");
            }

            match frame_sender.try_send(PreviewFrame {
                width,
                height,
                data,
            }) {
                Ok(()) => Ok(gstreamer::FlowSuccess::Ok),
                Err(e) if e.is_disconnected() => {
                    debug!("Preview receiver gone, ending stream");
                    Err(gstreamer::FlowError::Eos)
                }
                // Receiver is busy: drop this frame, the next one is fresher
                Err(_) => Ok(gstreamer::FlowSuccess::Ok),
            }
        })
        .build()
}

/// Copy `height` rows of `width` RGBA pixels out of a buffer with `stride`
/// bytes per row. Returns `None` if the buffer is too short.
pub fn pack_rgba(src: &[u8], width: u32, height: u32, stride: usize) -> Option<Vec<u8>> {
    let row_bytes = width as usize * 4;
    if stride < row_bytes {
        return None;
    }
    let height = height as usize;
    if height == 0 {
        return Some(Vec::new());
    }
    if src.len() < stride * (height - 1) + row_bytes {
        return None;
    }

    if stride == row_bytes {
        return Some(src[..row_bytes * height].to_vec());
    }

    let mut packed = Vec::with_capacity(row_bytes * height);
    for row in src.chunks(stride).take(height) {
        packed.extend_from_slice(&row[..row_bytes]);
    }
    Some(packed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_rgba_strips_row_padding() {
        // 1x2 image, stride 8 (4 bytes of padding per row)
        let src = [1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8];
        assert_eq!(pack_rgba(&src, 1, 2, 8), Some(vec![1, 2, 3, 4, 5, 6, 7, 8]));
    }

    #[test]
    fn test_pack_rgba_tight_buffer_is_copied() {
        let src = [9u8; 16];
        assert_eq!(pack_rgba(&src, 2, 2, 8), Some(vec![9u8; 16]));
    }

    #[test]
    fn test_pack_rgba_rejects_short_buffers() {
        assert_eq!(pack_rgba(&[0u8; 7], 1, 2, 4), None);
        assert_eq!(pack_rgba(&[0u8; 16], 2, 2, 4), None);
    }
}
