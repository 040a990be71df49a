use skera::{Duration, EdgePolicy, Resampler, ResamplingFunction, Value};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> skera::Result<()> {
    env_logger::builder()
        .filter_module("skera", log::LevelFilter::Trace)
        .parse_default_env()
        .init();

    let mut resampler = Resampler::new(
        Duration::seconds(1.0),
        ResamplingFunction::Average,
        3,
        0,
        EdgePolicy::LastTimestamp,
    )?;

    use rand::Rng;
    let mut rng = rand::thread_rng();

    // Simulate a sensor reporting every 100ms, with occasional dropouts
    let step = Duration::millis(100.0);
    let mut now = 0u128;

    for idx in 0..10_000u32 {
        now += step;

        let value: Option<Value> = if rng.gen_bool(0.05) {
            None
        } else {
            Some(50.0 + rng.gen_range(-5.0..5.0))
        };

        resampler.push_sample(now, value);

        if idx % 100 == 99 {
            for point in resampler.resample(now) {
                log::info!("{} => {:?}", point.timestamp, point.value);
            }
        }
    }

    log::info!(
        "late drops: {}, aged out: {}",
        resampler.late_drops(),
        resampler.aged_out(),
    );

    Ok(())
}
