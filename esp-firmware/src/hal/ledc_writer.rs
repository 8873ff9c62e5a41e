// LEDC RGB Writer
//
// Steuert eine RGB-LED über drei PWM-Kanäle des LEDC Peripherals.
// Alle Kanäle teilen sich Low-Speed Timer 0.

use esp_core::{DutyResolution, LedError, RgbDuty, RgbLedWriter};
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use rgb::RGB8;
use static_cell::StaticCell;

/// Fehler bei der LEDC-Initialisierung
#[derive(Debug)]
pub enum LedcError {
    Timer(timer::Error),
    Channel(channel::Error),
}

impl defmt::Format for LedcError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedcError::Timer(e) => {
                defmt::write!(fmt, "Timer config failed: {}", defmt::Debug2Format(e))
            }
            LedcError::Channel(e) => {
                defmt::write!(fmt, "Channel config failed: {}", defmt::Debug2Format(e))
            }
        }
    }
}

/// Timer muss 'static sein, da die Kanäle ihn per Referenz halten
static LEDC_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

/// Real Hardware RGB Writer
///
/// Nutzt LEDC Low-Speed Kanäle 0/1/2 für Rot/Grün/Blau.
pub struct LedcRgbWriter {
    // Peripheral bleibt für die Lebensdauer der Kanäle im Besitz des Writers
    _ledc: Ledc<'static>,
    red: channel::Channel<'static, LowSpeed>,
    green: channel::Channel<'static, LowSpeed>,
    blue: channel::Channel<'static, LowSpeed>,
    resolution: DutyResolution,
}

impl LedcRgbWriter {
    /// Erstellt einen neuen LedcRgbWriter
    ///
    /// Darf nur einmal aufgerufen werden (Timer liegt in einer StaticCell).
    ///
    /// # Parameter
    /// - `ledc_peripheral`: LEDC Peripheral
    /// - `red`/`green`/`blue`: GPIO6 / GPIO5 / GPIO4
    /// - `resolution`: PWM-Auflösung (z.B. 13 Bit)
    /// - `frequency_khz`: PWM-Frequenz in kHz
    pub fn new(
        ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
        red: esp_hal::peripherals::GPIO6<'static>,
        green: esp_hal::peripherals::GPIO5<'static>,
        blue: esp_hal::peripherals::GPIO4<'static>,
        resolution: DutyResolution,
        frequency_khz: u32,
    ) -> Result<Self, LedcError> {
        let mut ledc = Ledc::new(ledc_peripheral);
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

        let lstimer0 = LEDC_TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
        lstimer0
            .configure(timer::config::Config {
                duty: timer_duty(resolution),
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_khz(frequency_khz),
            })
            .map_err(LedcError::Timer)?;
        let lstimer0: &'static timer::Timer<'static, LowSpeed> = lstimer0;

        // Alle Kanäle starten mit Duty 0 (LED aus)
        let channel_config = || channel::config::Config {
            timer: lstimer0,
            duty_pct: 0,
            pin_config: channel::config::PinConfig::PushPull,
        };

        let mut red = ledc.channel(channel::Number::Channel0, red);
        red.configure(channel_config()).map_err(LedcError::Channel)?;

        let mut green = ledc.channel(channel::Number::Channel1, green);
        green.configure(channel_config()).map_err(LedcError::Channel)?;

        let mut blue = ledc.channel(channel::Number::Channel2, blue);
        blue.configure(channel_config()).map_err(LedcError::Channel)?;

        Ok(Self {
            _ledc: ledc,
            red,
            green,
            blue,
            resolution,
        })
    }
}

impl RgbLedWriter for LedcRgbWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        let duty = RgbDuty::from_color(color, self.resolution);

        // Duty direkt im Hardware-Format (0..=max_duty), nicht in Prozent
        self.red.set_duty_hw(duty.red);
        self.green.set_duty_hw(duty.green);
        self.blue.set_duty_hw(duty.blue);
        Ok(())
    }
}

fn timer_duty(resolution: DutyResolution) -> timer::config::Duty {
    match resolution {
        DutyResolution::Bits8 => timer::config::Duty::Duty8Bit,
        DutyResolution::Bits10 => timer::config::Duty::Duty10Bit,
        DutyResolution::Bits12 => timer::config::Duty::Duty12Bit,
        DutyResolution::Bits13 => timer::config::Duty::Duty13Bit,
        DutyResolution::Bits14 => timer::config::Duty::Duty14Bit,
    }
}
