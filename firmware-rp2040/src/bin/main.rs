#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use wii_ext_monitor_rp2040::{
    ControllerId, DefmtConsole, OledPanel, PollDriver, StartupError, WiiI2c, CONTROLLER_I2C_HZ,
    DISPLAY_I2C_HZ, POLL_INTERVAL_MS,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("wii-ext-monitor starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Controller bus: I2C0, SDA on GPIO 4 / SCL on GPIO 5 ---
    let mut controller_config = i2c::Config::default();
    controller_config.frequency = CONTROLLER_I2C_HZ;
    let controller_bus = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, controller_config);

    // --- Display bus: I2C1, SDA on GPIO 2 / SCL on GPIO 3 ---
    let mut display_config = i2c::Config::default();
    display_config.frequency = DISPLAY_I2C_HZ;
    let display_bus = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, display_config);

    let transport = match WiiI2c::init(controller_bus).await {
        Ok(transport) => transport,
        Err(e) => {
            error!("ERROR initializing extension controller bus: {}", e);
            return;
        }
    };

    let panel = OledPanel::new(display_bus);
    if panel.is_none() {
        info!("no OLED found, panel output disabled");
    }

    let mut driver =
        match PollDriver::identify(transport, DefmtConsole, panel, POLL_INTERVAL_MS).await {
            Ok(driver) => driver,
            Err(StartupError::IdentUnavailable) => {
                error!("no ident :(");
                return;
            }
            Err(StartupError::Transport(e)) => {
                error!("ERROR reading controller ident: {}", e);
                return;
            }
        };

    match driver.controller() {
        ControllerId::Nunchuk => info!("-> nunchuk detected"),
        ControllerId::Classic => info!("-> classic controller detected"),
        ControllerId::Unknown(code) => info!("-> unknown controller detected: {=u32:#x}", code),
    }

    driver.run(embassy_time::Delay).await
}
