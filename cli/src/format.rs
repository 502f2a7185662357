// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering of the derived values.

use std::error::Error;
use std::io::Write;

use colored::Colorize;
use rooster_core::{Rooster, SENSORS, SensorValue};

/// Writes the configured heading and one line per sensor.
///
/// "unknown" (no data) and "none" (computed but empty) render differently
/// on purpose; a blank line would conflate the two.
pub fn write_values(w: &mut impl Write, rooster: &Rooster) -> Result<(), Box<dyn Error>> {
    writeln!(w, "{}", rooster.name().bold())?;

    for sensor in SENSORS {
        let rendered = match rooster.value(sensor)? {
            SensorValue::Unknown => "unknown".dimmed().to_string(),
            SensorValue::Empty => "none".dimmed().to_string(),
            SensorValue::Text(text) => text,
        };
        writeln!(w, "  {:<24} {}", sensor.label(), rendered)?;
    }

    Ok(())
}
