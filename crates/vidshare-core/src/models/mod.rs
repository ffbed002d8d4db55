//! Wire models shared by the server and the client
//!
//! Every JSON body the API produces is defined here. Field names are camelCase
//! on the wire.

mod envelope;
mod system;
mod upload;
mod video;

pub use envelope::*;
pub use system::*;
pub use upload::*;
pub use video::*;
