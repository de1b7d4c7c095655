//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements  | Connects to                 |
//! |---------------|-------------|-----------------------------|
//! | `config_file` | ConfigPort  | JSON file on disk           |
//! | `log_sink`    | EventSink   | `log` facade                |
//! | `terminal`    | DisplayPort | any `io::Write`             |
//! |               | (input)     | any `io::BufRead`, per line |

pub mod config_file;
pub mod log_sink;
pub mod terminal;
