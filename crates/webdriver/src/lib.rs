//! W3C WebDriver client for SwagCheck
//!
//! A small, direct client for the WebDriver wire protocol:
//! - Spawns and supervises the driver binary (geckodriver/chromedriver)
//! - Opens sessions with firefox/chrome capabilities
//! - Locates elements and reads text/attributes/properties/CSS
//! - Polls DOM conditions with fixed-interval waits
//!
//! Only the endpoints the suites exercise are implemented; every call
//! goes through one envelope decoder so wire errors surface uniformly.

pub mod driver;
pub mod error;
pub mod protocol;
pub mod session;
pub mod wait;

pub use driver::{DriverConfig, DriverProcess};
pub use error::{Result, WebDriverError};
pub use protocol::{new_session_body, BrowserKind, By};
pub use session::{Element, Session};
pub use wait::Wait;
