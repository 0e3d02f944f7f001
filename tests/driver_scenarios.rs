//! End-to-end driver scenarios against a simulated TCS34725 on an
//! embedded-hal I2C bus.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use tcs34725_sorter::{
    registers, CandyColor, ChipId, ColorSensorPort, I2cRegisterBus, RawSample, SensorError,
    Tcs34725, Tcs34725Config,
};

/// Register-level model of the chip
struct SimulatedSensor {
    regs: [u8; 0x20],
    pointer: usize,
    writes: Vec<(u8, u8)>,
    word_reads: Vec<u8>,
    fail_after: Option<usize>,
    transactions: usize,
}

impl SimulatedSensor {
    fn new(id: u8) -> Self {
        let mut regs = [0u8; 0x20];
        regs[registers::ID as usize] = id;
        Self {
            regs,
            pointer: 0,
            writes: Vec::new(),
            word_reads: Vec::new(),
            fail_after: None,
            transactions: 0,
        }
    }

    fn with_channels(mut self, clear: u16, red: u16, green: u16, blue: u16) -> Self {
        self.set_channels(clear, red, green, blue);
        self
    }

    fn set_channels(&mut self, clear: u16, red: u16, green: u16, blue: u16) {
        let values = [clear, red, green, blue];
        for (register, value) in registers::CHANNEL_REGISTERS.into_iter().zip(values) {
            let [low, high] = value.to_le_bytes();
            self.regs[register as usize] = low;
            self.regs[register as usize + 1] = high;
        }
    }

    fn config_sequences(&self) -> usize {
        self.writes.iter().filter(|(reg, _)| *reg == registers::ATIME).count()
    }
}

impl ErrorType for SimulatedSensor {
    type Error = ErrorKind;
}

impl I2c for SimulatedSensor {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != registers::TCS34725_ADDR {
            return Err(ErrorKind::Other);
        }
        if self.fail_after.is_some_and(|limit| self.transactions >= limit) {
            return Err(ErrorKind::Other);
        }
        self.transactions += 1;

        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let select = bytes[0];
                    assert_eq!(
                        select & registers::COMMAND_BIT,
                        registers::COMMAND_BIT,
                        "command bit missing"
                    );
                    self.pointer = usize::from(select & 0x1F);
                    if let Some(&value) = bytes.get(1) {
                        self.regs[self.pointer] = value;
                        self.writes.push((self.pointer as u8, value));
                    }
                }
                Operation::Read(buf) => {
                    if buf.len() == 2 {
                        self.word_reads.push(self.pointer as u8);
                    }
                    for byte in buf.iter_mut() {
                        *byte = self.regs[self.pointer];
                        self.pointer += 1;
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct CountingDelay {
    total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

type Sensor = Tcs34725<I2cRegisterBus<SimulatedSensor>, CountingDelay>;

fn sensor(device: SimulatedSensor) -> Sensor {
    Tcs34725::new(I2cRegisterBus::new(device), CountingDelay::default())
}

fn device(sensor: Sensor) -> SimulatedSensor {
    sensor.release().0.release()
}

#[test]
fn yellow_candy_scenario() {
    let mut sensor = sensor(SimulatedSensor::new(0x44).with_channels(1700, 750, 650, 300));

    assert_eq!(sensor.color().unwrap(), CandyColor::Yellow);
    assert_eq!(sensor.color().unwrap().code(), 4);
    // 750 / 1700 * 255 = 112.5
    assert_eq!(sensor.red().unwrap(), 113);
    assert_eq!(sensor.chip(), Some(ChipId::Tcs34725));
}

#[test]
fn brown_candy_scenario() {
    let mut sensor = sensor(SimulatedSensor::new(0x44).with_channels(1000, 300, 200, 150));

    assert_eq!(sensor.color().unwrap(), CandyColor::Brown);
    assert_eq!(sensor.clear().unwrap(), 1000);
    assert_eq!(sensor.green().unwrap(), 51);
    assert_eq!(sensor.blue().unwrap(), 38);
}

#[test]
fn dark_sensor_clamps_clear() {
    let mut sensor = sensor(SimulatedSensor::new(0x44).with_channels(0, 0, 0, 0));

    assert_eq!(sensor.green().unwrap(), 0);
    assert_eq!(sensor.clear().unwrap(), 1);
    assert_eq!(sensor.color().unwrap(), CandyColor::Blank);
}

#[test]
fn init_runs_once_across_many_reads() {
    let mut sensor = sensor(SimulatedSensor::new(0x44).with_channels(500, 100, 100, 100));
    for _ in 0..10 {
        sensor.ensure_ready().unwrap();
        sensor.acquire().unwrap();
    }

    let device = device(sensor);
    assert_eq!(device.config_sequences(), 1);
    assert_eq!(
        device.writes,
        vec![
            (registers::ATIME, registers::ATIME_VALUE),
            (registers::CONTROL, registers::GAIN_VALUE),
            (registers::ENABLE, registers::ENABLE_PON),
            (registers::ENABLE, registers::ENABLE_PON | registers::ENABLE_AEN),
        ]
    );
}

#[test]
fn channels_read_clear_first() {
    let mut sensor = sensor(SimulatedSensor::new(0x10).with_channels(900, 1, 2, 3));
    sensor.acquire().unwrap();

    let device = device(sensor);
    assert_eq!(
        device.word_reads,
        vec![registers::CDATAL, registers::RDATAL, registers::GDATAL, registers::BDATAL]
    );
}

/// Lets a test change the light in front of the sensor mid-run
#[derive(Clone)]
struct SharedSensor(Rc<RefCell<SimulatedSensor>>);

impl ErrorType for SharedSensor {
    type Error = ErrorKind;
}

impl I2c for SharedSensor {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.0.borrow_mut().transaction(address, operations)
    }
}

#[test]
fn every_reading_is_fresh() {
    let shared = SharedSensor(Rc::new(RefCell::new(
        SimulatedSensor::new(0x44).with_channels(1000, 300, 200, 150),
    )));
    let mut sensor = Tcs34725::new(I2cRegisterBus::new(shared.clone()), CountingDelay::default());
    assert_eq!(sensor.color().unwrap(), CandyColor::Brown);

    shared.0.borrow_mut().set_channels(1700, 750, 650, 300);
    assert_eq!(sensor.color().unwrap(), CandyColor::Yellow);
    assert_eq!(sensor.clear().unwrap(), 1700);

    shared.0.borrow_mut().set_channels(0, 0, 0, 0);
    assert_eq!(sensor.clear().unwrap(), 1);

    let device = shared.0.borrow();
    assert_eq!(device.config_sequences(), 1);
    assert_eq!(device.word_reads.len(), 4 * 4);
}

#[test]
fn wrong_chip_never_initializes() {
    let mut sensor = sensor(SimulatedSensor::new(0x4D).with_channels(1700, 750, 650, 300));

    assert_eq!(sensor.ensure_ready(), Err(SensorError::NotDetected(0x4D)));
    for _ in 0..5 {
        assert_eq!(sensor.acquire().unwrap(), RawSample::new(0, 0, 0, 0));
        assert_eq!(sensor.color().unwrap(), CandyColor::Blank);
        assert_eq!(sensor.red().unwrap(), 0);
        assert_eq!(sensor.clear().unwrap(), 1);
    }
    assert!(!sensor.is_ready());

    let device = device(sensor);
    assert!(device.writes.is_empty());
    assert!(device.word_reads.is_empty());
}

#[test]
fn bus_error_propagates_and_keeps_cache() {
    let mut device = SimulatedSensor::new(0x44).with_channels(1000, 300, 200, 150);
    // First acquisition: ID read, 4 config writes, 4 channel reads.
    // The second one fails on the green channel.
    device.fail_after = Some(11);
    let mut sensor = sensor(device);

    let first = sensor.acquire().unwrap();
    assert_eq!(first, RawSample::new(1000, 300, 200, 150));

    assert_eq!(sensor.acquire(), Err(SensorError::Bus(ErrorKind::Other)));
    assert_eq!(sensor.raw_sample(), first);
    assert!(sensor.is_ready());
}

#[test]
fn absent_device_reports_bus_error() {
    let config = Tcs34725Config::default().with_address(0x39);
    let mut sensor = Tcs34725::with_config(
        I2cRegisterBus::new(SimulatedSensor::new(0x44)),
        CountingDelay::default(),
        config,
    );

    assert_eq!(sensor.acquire(), Err(SensorError::Bus(ErrorKind::Other)));
    assert!(!sensor.is_ready());
}

#[test]
fn interrupt_toggle_is_opt_in() {
    let config = Tcs34725Config::default().with_interrupt_toggle(true).with_settle_delay_ms(0);
    let mut sensor = Tcs34725::with_config(
        I2cRegisterBus::new(SimulatedSensor::new(0x44).with_channels(10, 1, 1, 1)),
        CountingDelay::default(),
        config,
    );
    sensor.acquire().unwrap();

    let device = device(sensor);
    assert_eq!(
        device.writes.last(),
        Some(&(
            registers::ENABLE,
            registers::ENABLE_PON | registers::ENABLE_AEN | registers::ENABLE_AIEN
        ))
    );
}

#[test]
fn waits_for_power_on_and_settle() {
    let mut sensor = sensor(SimulatedSensor::new(0x44).with_channels(10, 1, 1, 1));
    sensor.acquire().unwrap();

    let (_, delay) = sensor.release();
    // 3 ms after PON + 50 ms settle
    assert_eq!(delay.total_ns, 53_000_000);
}

#[test]
fn first_batch_rules_through_config() {
    let mut sensor = Tcs34725::with_config(
        I2cRegisterBus::new(SimulatedSensor::new(0x44).with_channels(600, 200, 200, 150)),
        CountingDelay::default(),
        Tcs34725Config::first_batch(),
    );

    assert_eq!(sensor.color().unwrap(), CandyColor::Brown);
}

#[test]
fn status_avalid() {
    let mut device = SimulatedSensor::new(0x44);
    device.regs[registers::STATUS as usize] = registers::STATUS_AVALID;
    let mut sensor = sensor(device);

    assert!(sensor.data_valid().unwrap());
}

#[test]
fn port_reading_is_consistent() {
    fn sort<S: ColorSensorPort>(sensor: &mut S) -> Result<u8, S::Error> {
        sensor.read().map(|reading| reading.color.code())
    }

    let mut sensor = sensor(SimulatedSensor::new(0x44).with_channels(1400, 800, 450, 350));
    assert_eq!(sort(&mut sensor).unwrap(), CandyColor::Orange.code());

    let reading = ColorSensorPort::read(&mut sensor).unwrap();
    assert_eq!(reading.raw, RawSample::new(1400, 800, 450, 350));
    assert_eq!(reading.red, 146);
    assert_eq!(reading.green, 82);
    assert_eq!(reading.blue, 64);
}
