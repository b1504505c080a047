// SPDX-License-Identifier: MPL-2.0

//! Main application module for Camera Tabs
//!
//! This module contains the application state, message handling, UI rendering,
//! and the subscriptions driving the preview and the record timer.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, ContextPage)
//! - `tab_bar`: Bottom tab bar overlay
//! - `screens`: One view per tab plus the permission prompt
//! - `camera_preview`: Preview image, grid lines and letterbox
//! - `controls`: Record button, timer pill, mode switch, zoom chips
//! - `bottom_bar`: Gallery thumbnail and camera flip button
//! - `settings`: Settings drawer UI
//! - `view`: Main view rendering
//! - `update`: Message handling
//!
//! # Main Types
//!
//! - `AppModel`: Main application state owning the shared mode store
//! - `Message`: All possible user interactions and system events

mod bottom_bar;
mod camera_preview;
mod controls;
mod handlers;
mod screens;
pub mod settings;
mod state;
mod tab_bar;
mod update;
mod view;

use crate::backends::camera::{CameraProvider, FrameReceiver, SystemCameraProvider};
use crate::config::{AppTheme, Config};
use crate::constants::{app_info, preview, timing};
use crate::errors::AppError;
use crate::fl;
use crate::session::ModeScope;
use crate::tabs::TabContainer;
use crate::timer::RecordTimer;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppModel, ContextPage, Message};
use tracing::{error, info, warn};

const REPOSITORY: &str = "https://github.com/camera-tabs/camera-tabs";
const APP_ICON: &[u8] =
    include_bytes!("../../resources/icons/hicolor/scalable/apps/io.github.camera_tabs.CameraTabs.svg");

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.camera_tabs.CameraTabs";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(app_info::version())
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let mut startup_error = None;
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    startup_error = Some(AppError::Config(err.to_string()));
                    (None, Config::default())
                }
            };

        info!(
            environment = app_info::runtime_environment(),
            version = app_info::version(),
            "Starting"
        );

        // Initialize GStreamer early (required before any GStreamer calls)
        if let Err(e) = gstreamer::init() {
            error!(error = %e, "Failed to initialize GStreamer");
        }

        let theme_dropdown_options = AppTheme::ALL
            .iter()
            .map(|theme| match theme {
                AppTheme::System => fl!("theme-system"),
                AppTheme::Dark => fl!("theme-dark"),
                AppTheme::Light => fl!("theme-light"),
            })
            .collect();

        // The shared store lives exactly as long as the app model
        let mut scope = ModeScope::established();
        let tabs = TabContainer::new();
        tabs.mount(scope.establish());

        let app_theme = config.app_theme;

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            scope,
            tabs,
            record_timer: RecordTimer::new(),
            permission: Default::default(),
            available_cameras: Vec::new(),
            current_frame: None,
            theme_dropdown_options,
            error: startup_error,
        };

        let init_tasks = Task::batch([
            handlers::camera::query_permission(),
            cosmic::command::set_theme(app_theme.theme()),
        ]);

        (app, init_tasks)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![]
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("help-about-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::About))
                .into(),
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        // Periodic tick only while the Video screen is mounted and recording
        let timer_sub = if self.video_screen_mounted() && self.record_timer.is_running() {
            cosmic::iced::time::every(timing::RECORD_TICK).map(|_| Message::RecordTick)
        } else {
            Subscription::none()
        };

        // Live preview only while the Video screen is mounted with access granted.
        // The id changes with the device so a flip restarts the pipeline.
        let preview_sub = match self.selected_camera() {
            Some(camera) if self.video_screen_mounted() && self.permission.is_granted() => {
                preview_subscription(camera.id.clone())
            }
            _ => Subscription::none(),
        };

        Subscription::batch([config_sub, timer_sub, preview_sub])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}

/// Stream preview frames of `device_id` into the app.
///
/// A pipeline that fails to start is retried after a delay. The pipeline is
/// dropped, stopping the camera, as soon as the subscription goes away.
fn preview_subscription(device_id: String) -> Subscription<Message> {
    use cosmic::iced::futures::SinkExt;

    Subscription::run_with_id(
        ("preview", device_id.clone()),
        cosmic::iced::stream::channel(preview::CHANNEL_CAPACITY, move |mut output| async move {
            info!(device = %device_id, "Preview subscription started");

            loop {
                let (sender, receiver) =
                    cosmic::iced::futures::channel::mpsc::channel(preview::CHANNEL_CAPACITY);

                let id = device_id.clone();
                let created = tokio::task::spawn_blocking(move || {
                    SystemCameraProvider::new().preview(&id, sender)
                })
                .await;

                let pipeline = match created {
                    Ok(Ok(pipeline)) => pipeline,
                    Ok(Err(err)) => {
                        if output.send(Message::PreviewFailed(err)).await.is_err() {
                            break;
                        }
                        tokio::time::sleep(timing::PREVIEW_RETRY).await;
                        continue;
                    }
                    Err(err) => {
                        error!(error = %err, "Preview pipeline task panicked");
                        break;
                    }
                };

                let failure = forward_frames(&pipeline, receiver, &mut output).await;
                drop(pipeline);

                match failure {
                    Some(err) => {
                        if output.send(Message::PreviewFailed(err)).await.is_err() {
                            break;
                        }
                        tokio::time::sleep(timing::PREVIEW_RETRY).await;
                    }
                    None => break,
                }
            }

            info!(device = %device_id, "Preview subscription stopped");
        }),
    )
}

/// Forward frames until the UI side goes away (`None`) or the pipeline fails.
async fn forward_frames(
    pipeline: &crate::backends::camera::PreviewPipeline,
    mut receiver: FrameReceiver,
    output: &mut cosmic::iced::futures::channel::mpsc::Sender<Message>,
) -> Option<crate::backends::camera::BackendError> {
    use cosmic::iced::futures::StreamExt;

    let mut frame_count = 0u64;
    loop {
        if output.is_closed() {
            info!("Output channel closed, stopping preview");
            return None;
        }

        if let Some(err) = pipeline.poll_error() {
            return Some(err);
        }

        // Wake up periodically to notice a closed subscription
        match tokio::time::timeout(timing::FRAME_WAIT, receiver.next()).await {
            Ok(Some(frame)) => {
                frame_count += 1;
                // Dropping frames is fine for live preview, the next one is fresher
                if let Err(e) = output.try_send(Message::PreviewFrame(frame.into_handle())) {
                    if e.is_disconnected() {
                        return None;
                    }
                    if frame_count % timing::FRAME_LOG_INTERVAL == 0 {
                        warn!(frame = frame_count, "Preview frame dropped (UI busy)");
                    }
                }
            }
            Ok(None) => {
                return Some(crate::backends::camera::BackendError::Pipeline(
                    "frame stream ended".to_string(),
                ));
            }
            Err(_) => continue,
        }
    }
}
