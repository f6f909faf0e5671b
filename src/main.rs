// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Date counter: step a count and watch a date move with it

mod clock;
mod date_counter;
mod relative;

use clock::LocalClock;

fn main() -> kas::app::Result<()> {
    env_logger::init();

    let theme = kas::theme::FlatTheme::new();
    kas::app::Default::with_theme(theme)
        .build(())?
        .with(date_counter::window(LocalClock))
        .run()
}
