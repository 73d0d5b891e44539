//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `hardware`     | SensorPort         | ESP32 ADC, GPIO          |
//! |                | ActuatorPort       | ESP32 GPIO, LEDC tone    |
//! |                | DisplayPort        | I²C character LCD        |
//! | `log_sink`     | EventSink          | Serial log output        |

pub mod hardware;
pub mod log_sink;
