use std::fmt;
use std::sync::Arc;
use std::{thread, time::Duration};

use gfx::{Renderer, RendererError};
use winit::{
    application::ApplicationHandler,
    error::{EventLoopError, OsError},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

mod demo;

pub use demo::DemoForm;

#[derive(Debug)]
pub enum PlatformError {
    EventLoop(EventLoopError),
    Window(OsError),
    Renderer(RendererError),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::EventLoop(e) => write!(f, "event loop error: {e}"),
            PlatformError::Window(e) => write!(f, "failed to create window: {e}"),
            PlatformError::Renderer(e) => write!(f, "renderer error: {e}"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::EventLoop(e) => Some(e),
            PlatformError::Window(e) => Some(e),
            PlatformError::Renderer(e) => Some(e),
        }
    }
}

impl From<EventLoopError> for PlatformError {
    fn from(e: EventLoopError) -> Self {
        PlatformError::EventLoop(e)
    }
}

impl From<OsError> for PlatformError {
    fn from(e: OsError) -> Self {
        PlatformError::Window(e)
    }
}

impl From<RendererError> for PlatformError {
    fn from(e: RendererError) -> Self {
        PlatformError::Renderer(e)
    }
}

enum UserEvent {
    Tick,
}

/// Open the demo window and run until it is closed.
pub fn run() -> Result<(), PlatformError> {
    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let proxy = event_loop.create_proxy();

    let mut app = PlatformApp {
        window: None,
        renderer: None,
        proxy: Some(proxy),
        ticker_started: false,
        form: DemoForm::new(),
        failure: None,
    };
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct PlatformApp {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
    form: DemoForm,
    failure: Option<PlatformError>,
}

impl PlatformApp {
    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        if self.window.is_none() {
            let window = event_loop
                .create_window(Window::default_attributes().with_title("imefield"))?;
            self.window = Some(Arc::new(window));
        }
        if self.renderer.is_none()
            && let Some(window) = self.window.as_ref()
        {
            self.renderer = Some(Renderer::new(Arc::clone(window))?);
        }
        Ok(())
    }

    fn start_ticker(&mut self) {
        if self.ticker_started {
            return;
        }
        self.ticker_started = true;

        if let Some(proxy) = self.proxy.clone() {
            thread::spawn(move || {
                let frame = Duration::from_millis(16); // ~60Hz
                loop {
                    if proxy.send_event(UserEvent::Tick).is_err() {
                        break;
                    }
                    thread::sleep(frame);
                }
            });
        }
    }
}

impl ApplicationHandler<UserEvent> for PlatformApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.init_window(event_loop) {
            log::error!(target: "platform", "{e}");
            self.failure = Some(e);
            event_loop.exit();
            return;
        }
        self.start_ticker();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) else {
            return;
        };
        if renderer.on_window_event(window, &event) {
            window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                renderer.resize(new_size);
            }
            WindowEvent::RedrawRequested => {
                let form = &mut self.form;
                renderer.render(window, |ctx| form.show(ctx));
                if form.quit_requested() {
                    log::info!(target: "platform", "quit requested");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}
