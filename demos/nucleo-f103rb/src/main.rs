#![no_std]
#![no_main]

use defmt::*;
use dual_led_sequencer::{DutyDriver, Sequencer, Showcase};
use embassy_executor::Spawner;
use embassy_stm32::gpio::OutputType;
use embassy_stm32::peripherals::TIM3;
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm, SimplePwmChannel};
use embassy_stm32::usart::{self, UartTx};
use embassy_stm32::{Config, Peripherals};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

mod serial;

use serial::SerialLog;

const PWM_FREQUENCY: Hertz = Hertz(1_000);
const BAUD_RATE: u32 = 115_200;

type Led = DutyDriver<SimplePwmChannel<'static, TIM3>, SimplePwmChannel<'static, TIM3>>;

/// Configure system clock: HSI/2 x16 = 64 MHz, APB1 at 32 MHz
fn configure_clock() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hsi = true;
        config.rcc.pll = Some(Pll {
            src: PllSource::HSI,
            prediv: PllPreDiv::DIV1,
            mul: PllMul::MUL16,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    config
}

/// Initialize PWM for TIM3 (red: PA6, green: PA7)
fn setup_led(p: &mut Peripherals) -> Led {
    let tim3 = unsafe { p.TIM3.clone_unchecked() };
    let pa6 = unsafe { p.PA6.clone_unchecked() };
    let pa7 = unsafe { p.PA7.clone_unchecked() };

    let red_pin = PwmPin::new(pa6, OutputType::PushPull);
    let green_pin = PwmPin::new(pa7, OutputType::PushPull);

    let pwm = SimplePwm::new(
        tim3,
        Some(red_pin),
        Some(green_pin),
        None,
        None,
        PWM_FREQUENCY,
        Default::default(),
    );

    let mut channels = pwm.split();
    channels.ch1.enable();
    channels.ch2.enable();

    DutyDriver::new(channels.ch1, channels.ch2)
}

/// Configure USART2 TX (PA2) for progress output
fn setup_serial(p: &mut Peripherals) -> SerialLog<'static> {
    let usart2 = unsafe { p.USART2.clone_unchecked() };
    let pa2 = unsafe { p.PA2.clone_unchecked() };

    let mut config = usart::Config::default();
    config.baudrate = BAUD_RATE;

    let tx = unwrap!(UartTx::new_blocking(usart2, pa2, config));
    SerialLog::new(tx)
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Starting...");

    let config = configure_clock();
    let mut p = embassy_stm32::init(config);

    let led = setup_led(&mut p);
    let log = setup_serial(&mut p);
    info!("PWM period: {}", led.period());

    let sequencer = Sequencer::new(led, Delay, log);
    let mut showcase = unwrap!(Showcase::new(sequencer));

    info!("Ready!");

    showcase.banner();
    showcase.run_forever()
}
