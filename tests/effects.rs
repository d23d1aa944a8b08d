use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use walkers_terminal::carousel::{Carousel, GALLERY_PERIOD, GALLERY_RESUME};
use walkers_terminal::loader::{InitialLoader, LoaderStage};

#[test]
fn loader_fills_holds_then_fades_out() {
    let mut rng = StdRng::seed_from_u64(7);
    let t0 = Instant::now();
    let mut loader = InitialLoader::new(5.0, t0);
    assert_eq!(loader.stage(), LoaderStage::Filling);
    assert_eq!(loader.step_interval(), Duration::from_millis(200));

    let mut last = 0;
    let mut now = t0;
    while loader.stage() == LoaderStage::Filling && now < t0 + Duration::from_secs(60) {
        now += loader.step_interval();
        loader.tick(now, &mut rng);
        assert!(loader.progress() >= last);
        last = loader.progress();
    }
    assert_eq!(loader.progress(), 100);
    assert_eq!(loader.stage(), LoaderStage::Holding);

    loader.tick(now + Duration::from_millis(499), &mut rng);
    assert_eq!(loader.stage(), LoaderStage::Holding);
    loader.tick(now + Duration::from_millis(500), &mut rng);
    assert_eq!(loader.stage(), LoaderStage::Fading);
    loader.tick(now + Duration::from_millis(1300), &mut rng);
    assert!(loader.is_done());
}

#[test]
fn faster_links_step_more_often() {
    let t0 = Instant::now();
    let slow = InitialLoader::new(1.0, t0);
    let fast = InitialLoader::new(40.0, t0);
    let broken = InitialLoader::new(f64::NAN, t0);
    assert_eq!(slow.step_interval(), Duration::from_millis(200));
    assert_eq!(fast.step_interval(), Duration::from_millis(25));
    assert_eq!(broken.step_interval(), Duration::from_millis(200));
}

#[test]
fn late_tick_finishes_filling_in_one_go() {
    let mut rng = StdRng::seed_from_u64(1);
    let t0 = Instant::now();
    let mut loader = InitialLoader::new(5.0, t0);
    loader.tick(t0 + Duration::from_secs(120), &mut rng);
    assert_eq!(loader.progress(), 100);
    assert_eq!(loader.stage(), LoaderStage::Holding);
}

#[test]
fn carousel_advances_and_wraps() {
    let t0 = Instant::now();
    let mut carousel = Carousel::new(3, GALLERY_PERIOD, GALLERY_RESUME, t0);
    carousel.tick(t0 + GALLERY_PERIOD);
    assert_eq!(carousel.index(), 1);
    carousel.tick(t0 + GALLERY_PERIOD * 3);
    assert_eq!(carousel.index(), 0);
}

#[test]
fn manual_selection_pauses_then_resumes() {
    let t0 = Instant::now();
    let mut carousel = Carousel::new(4, GALLERY_PERIOD, GALLERY_RESUME, t0);
    let picked = t0 + Duration::from_secs(1);
    carousel.select(2, picked);
    assert!(carousel.is_paused());

    carousel.tick(picked + GALLERY_PERIOD - Duration::from_millis(1));
    assert_eq!(carousel.index(), 2);

    let resumed = picked + GALLERY_RESUME;
    carousel.tick(resumed);
    assert!(!carousel.is_paused());
    assert_eq!(carousel.index(), 2);

    carousel.tick(resumed + GALLERY_PERIOD);
    assert_eq!(carousel.index(), 3);
}

#[test]
fn input_during_pause_extends_it() {
    let t0 = Instant::now();
    let mut carousel = Carousel::new(4, GALLERY_PERIOD, GALLERY_RESUME, t0);
    carousel.next(t0);
    carousel.next(t0 + Duration::from_secs(4));
    carousel.tick(t0 + Duration::from_secs(6));
    assert!(carousel.is_paused());
    assert_eq!(carousel.index(), 2);
    carousel.prev(t0 + Duration::from_secs(7));
    assert_eq!(carousel.index(), 1);
}

#[test]
fn stopped_or_empty_carousel_stays_put() {
    let t0 = Instant::now();
    let mut empty = Carousel::new(0, GALLERY_PERIOD, GALLERY_RESUME, t0);
    empty.tick(t0 + Duration::from_secs(60));
    empty.next(t0);
    assert_eq!(empty.index(), 0);
    assert!(empty.is_empty());

    let mut stopped = Carousel::new(3, GALLERY_PERIOD, GALLERY_RESUME, t0);
    stopped.stop();
    stopped.tick(t0 + Duration::from_secs(60));
    assert_eq!(stopped.index(), 0);
}
