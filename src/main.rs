use iced::widget::image::Handle;
use iced::widget::{button, column, container, mouse_area, pick_list, row, slider, text};
use iced::{Alignment, Element, Length, Task, Theme};
use image::DynamicImage;
use rfd::FileDialog;
use std::path::PathBuf;

mod filter;
mod photos;
mod pipeline;
mod state;

use filter::FilterKind;
use photos::{loader, saver};
use state::session::EditorSession;
use state::session_store;

/// Main application state
struct SnapFilter {
    /// The editing session (source image, filter, sliders, processed image)
    session: EditorSession,
    /// Preview handle derived from the processed image
    preview: Option<Handle>,
    /// Whether the "pick an image first" alert is showing
    no_image_alert: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the preview area to pick an image
    PickImage,
    /// Background decode of the picked image finished
    ImageLoaded(Result<DynamicImage, loader::LoadError>),
    /// User picked a different filter
    FilterPicked(FilterKind),
    /// Intensity slider moved
    IntensityChanged(f32),
    /// Radius slider moved
    RadiusChanged(f32),
    /// User clicked "Save"
    SavePressed,
    /// Background save finished
    SaveComplete(Result<PathBuf, saver::SaveError>),
    /// User dismissed the no-image alert
    DismissAlert,
}

impl SnapFilter {
    /// Create a new instance of the application, restoring the last session
    fn new() -> (Self, Task<Message>) {
        let stored = session_store::load();
        println!(
            "🎨 SnapFilter ready. Filter: {}, intensity {:.2}, radius {:.2}",
            stored.filter, stored.params.intensity, stored.params.radius
        );

        (
            SnapFilter {
                session: EditorSession::new(stored.filter, stored.params),
                preview: None,
                no_image_alert: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select a Picture")
                    .add_filter("Images", &loader::IMAGE_EXTENSIONS)
                    .pick_file();

                if let Some(path) = file {
                    return Task::perform(loader::load_image(path), Message::ImageLoaded);
                }

                Task::none()
            }
            Message::ImageLoaded(Ok(image)) => {
                self.session.set_source(image);
                self.no_image_alert = false;
                self.refresh_preview();
                Task::none()
            }
            Message::ImageLoaded(Err(e)) => {
                eprintln!("⚠️  Could not load image: {}", e);
                Task::none()
            }
            Message::FilterPicked(kind) => {
                self.session.set_filter(kind);
                self.refresh_preview();
                self.persist_session();
                Task::none()
            }
            Message::IntensityChanged(value) => {
                self.session.set_intensity(value);
                self.refresh_preview();
                self.persist_session();
                Task::none()
            }
            Message::RadiusChanged(value) => {
                self.session.set_radius(value);
                self.refresh_preview();
                self.persist_session();
                Task::none()
            }
            Message::SavePressed => {
                let Some(processed) = self.session.processed() else {
                    self.no_image_alert = true;
                    return Task::none();
                };

                // Fire-and-forget; the outcome comes back as one message
                // and is only logged.
                Task::perform(
                    saver::save_to_pictures(processed.clone()),
                    Message::SaveComplete,
                )
            }
            Message::SaveComplete(Ok(path)) => {
                println!("✅ Success! Saved to {}", path.display());
                Task::none()
            }
            Message::SaveComplete(Err(e)) => {
                eprintln!("⚠️  Oops: {}", e);
                Task::none()
            }
            Message::DismissAlert => {
                self.no_image_alert = false;
                Task::none()
            }
        }
    }

    /// Rebuild the preview handle from the current processed image
    fn refresh_preview(&mut self) {
        self.preview = self.session.processed().map(pipeline::to_handle);
    }

    /// Persist the current filter and sliders (best-effort)
    fn persist_session(&self) {
        session_store::save(self.session.filter(), self.session.params());
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let params = self.session.params();

        // Preview area: the processed image, or a prompt before a pick.
        let preview: Element<Message> = match &self.preview {
            Some(handle) => iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => container(text("Click to select a picture").size(20))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        };

        let preview_area = mouse_area(
            container(preview)
                .width(Length::Fill)
                .height(Length::FillPortion(4)),
        )
        .on_press(Message::PickImage);

        let radius_row = row![
            text("Radius").width(Length::Fixed(100.0)),
            slider(0.0..=1.0, params.radius, Message::RadiusChanged).step(0.01),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let intensity_row = row![
            text("Intensity").width(Length::Fixed(100.0)),
            slider(0.0..=1.0, params.intensity, Message::IntensityChanged).step(0.01),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        // The pick list shows the current filter's formatted name and opens
        // the fixed list of choices.
        let controls = row![
            pick_list(
                FilterKind::ALL,
                Some(self.session.filter()),
                Message::FilterPicked,
            ),
            iced::widget::horizontal_space(),
            button("Save").on_press(Message::SavePressed).padding(10),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let mut content = column![preview_area, radius_row, intensity_row, controls]
            .spacing(15)
            .padding(20);

        if self.no_image_alert {
            content = content.push(
                row![
                    text("Please select an image before saving."),
                    iced::widget::horizontal_space(),
                    button("OK").on_press(Message::DismissAlert),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            );
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("SnapFilter", SnapFilter::update, SnapFilter::view)
        .theme(SnapFilter::theme)
        .centered()
        .run_with(SnapFilter::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use crate::state::params::FilterParams;

    fn app() -> SnapFilter {
        SnapFilter {
            session: EditorSession::new(FilterKind::SepiaTone, FilterParams::default()),
            preview: None,
            no_image_alert: false,
        }
    }

    fn sample_image() -> DynamicImage {
        let mut img = RgbaImage::new(4, 4);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([90, 120, 150, 255]);
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_save_without_an_image_raises_the_alert() {
        let mut app = app();

        let _ = app.update(Message::SavePressed);
        assert!(app.no_image_alert);
        assert!(app.session.processed().is_none());

        let _ = app.update(Message::DismissAlert);
        assert!(!app.no_image_alert);
    }

    #[test]
    fn test_loading_an_image_fills_the_preview_and_clears_the_alert() {
        let mut app = app();
        app.no_image_alert = true;

        let _ = app.update(Message::ImageLoaded(Ok(sample_image())));
        assert!(app.preview.is_some());
        assert!(app.session.processed().is_some());
        assert!(!app.no_image_alert);
    }

    #[test]
    fn test_failed_load_changes_nothing() {
        let mut app = app();

        let _ = app.update(Message::ImageLoaded(Err(loader::LoadError::NotFound(
            PathBuf::from("/nope.png"),
        ))));
        assert!(app.preview.is_none());
        assert!(app.session.processed().is_none());
    }
}
