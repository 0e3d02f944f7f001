//! TCS34725 Driver Implementation
//!
//! Lazily initializes the sensor, refreshes the raw RGBC sample on every
//! request and derives normalized channels and candy labels from it.
//!
//! This driver is platform-agnostic: it talks to the device through a
//! `RegisterBus` and waits through an `embedded_hal::delay::DelayNs`.

use embedded_hal::delay::DelayNs;

use super::config::{ChipId, Tcs34725Config};
use super::registers::{self, command};
use crate::domain::{classify, CandyColor, ColorReading, RawSample};
use crate::ports::{ColorSensorPort, RegisterBus, SensorError};

/// TCS34725 color sensor driver
///
/// # Type Parameters
///
/// * `B` - register bus transport (see `I2cRegisterBus`)
/// * `D` - blocking delay provider
pub struct Tcs34725<B, D> {
    /// Register bus handle
    bus: B,

    /// Delay provider for power-on and settle waits
    delay: D,

    /// Driver configuration
    config: Tcs34725Config,

    /// Last acquired sample (dark, clear 1, until the first successful read-out)
    sample: RawSample,

    /// Identity seen during the successful initialization
    chip: Option<ChipId>,
}

impl<B, D> Tcs34725<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    /// Create a new driver with the default configuration
    ///
    /// No bus traffic happens until the first reading is requested.
    pub fn new(bus: B, delay: D) -> Self {
        Self::with_config(bus, delay, Tcs34725Config::default())
    }

    /// Create a new driver with a custom configuration
    pub fn with_config(bus: B, delay: D, config: Tcs34725Config) -> Self {
        Self {
            bus,
            delay,
            config,
            sample: RawSample::new(0, 0, 0, 0),
            chip: None,
        }
    }

    /// Initialize the sensor if that has not happened yet
    ///
    /// Sequence:
    /// 1. Verify the ID register
    /// 2. Set integration time and gain
    /// 3. Power on, wait for the oscillator
    /// 4. Enable the RGBC ADC
    ///
    /// Returns immediately without bus traffic once the sensor is ready. On an
    /// identity mismatch the driver stays uninitialized and the next call
    /// tries again.
    pub fn ensure_ready(&mut self) -> Result<(), SensorError<B::Error>> {
        if self.chip.is_some() {
            return Ok(());
        }

        let id = self.read_register(registers::ID)?;
        let Some(chip) = ChipId::from_register(id) else {
            log_warn!("TCS34725 not detected (ID: {:#x})", id);
            return Err(SensorError::NotDetected(id));
        };
        log_info!("TCS34725 detected (ID: {:#x})", id);

        self.write_register(registers::ATIME, registers::ATIME_VALUE)?;
        self.write_register(registers::CONTROL, registers::GAIN_VALUE)?;
        self.write_register(registers::ENABLE, registers::ENABLE_PON)?;
        self.delay.delay_ms(registers::POWER_ON_DELAY_MS);
        self.write_register(registers::ENABLE, registers::ENABLE_PON | registers::ENABLE_AEN)?;

        self.chip = Some(chip);
        log_debug!(
            "TCS34725 configured (ATIME: {:#x}, gain: {:#x})",
            registers::ATIME_VALUE,
            registers::GAIN_VALUE
        );
        Ok(())
    }

    /// Refresh the raw sample from the device
    ///
    /// If the sensor cannot be identified the cached sample is returned as is
    /// (zero counts with clear 1 before any successful read-out) and the
    /// channel registers are not touched. Bus errors propagate and leave the cache unchanged.
    pub fn acquire(&mut self) -> Result<RawSample, SensorError<B::Error>> {
        match self.ensure_ready() {
            Ok(()) => {}
            Err(SensorError::NotDetected(_)) => return Ok(self.sample),
            Err(error) => return Err(error),
        }

        let [clear, red, green, blue] = self.read_channels()?;
        self.sample = RawSample::new(clear, red, green, blue);
        log_trace!(
            "RGBC: c={} r={} g={} b={}",
            self.sample.clear,
            self.sample.red,
            self.sample.green,
            self.sample.blue
        );

        self.delay.delay_ms(self.config.settle_delay_ms);

        if self.config.interrupt_toggle {
            let enable = self.read_register(registers::ENABLE)?;
            self.write_register(registers::ENABLE, enable | registers::ENABLE_AIEN)?;
        }

        Ok(self.sample)
    }

    /// Acquire one sample and derive the full reading from it
    pub fn read(&mut self) -> Result<ColorReading, SensorError<B::Error>> {
        let sample = self.acquire()?;
        let color = self.classify(&sample);
        Ok(ColorReading::new(sample, color))
    }

    /// Normalized red channel from a fresh sample
    pub fn red(&mut self) -> Result<u32, SensorError<B::Error>> {
        Ok(self.acquire()?.normalized_red())
    }

    /// Normalized green channel from a fresh sample
    pub fn green(&mut self) -> Result<u32, SensorError<B::Error>> {
        Ok(self.acquire()?.normalized_green())
    }

    /// Normalized blue channel from a fresh sample
    pub fn blue(&mut self) -> Result<u32, SensorError<B::Error>> {
        Ok(self.acquire()?.normalized_blue())
    }

    /// Raw clear channel from a fresh sample, never below 1
    pub fn clear(&mut self) -> Result<u16, SensorError<B::Error>> {
        Ok(self.acquire()?.clear)
    }

    /// Candy color of a fresh sample
    pub fn color(&mut self) -> Result<CandyColor, SensorError<B::Error>> {
        let sample = self.acquire()?;
        Ok(self.classify(&sample))
    }

    /// Whether a full integration cycle completed since the ADC was enabled
    ///
    /// Reads STATUS.AVALID. Initializes the sensor first if needed.
    pub fn data_valid(&mut self) -> Result<bool, SensorError<B::Error>> {
        self.ensure_ready()?;
        let status = self.read_register(registers::STATUS)?;
        Ok(status & registers::STATUS_AVALID != 0)
    }

    /// Check if the sensor has been initialized
    pub fn is_ready(&self) -> bool {
        self.chip.is_some()
    }

    /// Chip identified during initialization
    pub fn chip(&self) -> Option<ChipId> {
        self.chip
    }

    /// Cached sample from the last acquisition, without touching the bus
    pub fn raw_sample(&self) -> RawSample {
        self.sample
    }

    /// Release the bus and delay provider
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    fn classify(&self, sample: &RawSample) -> CandyColor {
        let color = classify(sample, self.config.rules);
        log_debug!("candy color: {}", color.name());
        color
    }

    /// Read all four channels in register order, clear first
    fn read_channels(&mut self) -> Result<[u16; 4], B::Error> {
        let mut channels = [0u16; 4];
        for (value, register) in channels.iter_mut().zip(registers::CHANNEL_REGISTERS) {
            *value = self.bus.read_word(self.config.address, command(register))?;
        }
        Ok(channels)
    }

    fn read_register(&mut self, register: u8) -> Result<u8, B::Error> {
        self.bus.read_byte(self.config.address, command(register))
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), B::Error> {
        self.bus.write_byte(self.config.address, command(register), value)
    }
}

impl<B, D> ColorSensorPort for Tcs34725<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    type Error = SensorError<B::Error>;

    fn read(&mut self) -> Result<ColorReading, Self::Error> {
        Tcs34725::read(self)
    }

    fn red(&mut self) -> Result<u32, Self::Error> {
        Tcs34725::red(self)
    }

    fn green(&mut self) -> Result<u32, Self::Error> {
        Tcs34725::green(self)
    }

    fn blue(&mut self) -> Result<u32, Self::Error> {
        Tcs34725::blue(self)
    }

    fn clear(&mut self) -> Result<u16, Self::Error> {
        Tcs34725::clear(self)
    }

    fn color(&mut self) -> Result<CandyColor, Self::Error> {
        Tcs34725::color(self)
    }

    fn is_ready(&self) -> bool {
        Tcs34725::is_ready(self)
    }
}
