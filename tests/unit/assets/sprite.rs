use super::*;

fn one_px() -> Sprite {
    Sprite::new(1, 1, Arc::new(vec![255, 255, 255, 255])).unwrap()
}

#[test]
fn sprite_validates_dimensions() {
    assert!(Sprite::new(0, 1, Arc::new(vec![])).is_err());
    assert!(Sprite::new(2, 2, Arc::new(vec![0; 4])).is_err());
    let s = Sprite::new(4, 2, Arc::new(vec![0; 32])).unwrap();
    assert_eq!(s.aspect(), 0.5);
}

#[test]
fn pending_slot_becomes_ready_after_send() {
    let (tx, rx) = mpsc::channel();
    let mut slot = SpriteSlot::from_receiver(rx);
    slot.poll();
    assert!(!slot.is_decoded());
    assert!(slot.sprite().is_none());

    tx.send(Ok(one_px())).unwrap();
    slot.poll();
    assert!(slot.is_decoded());
    assert_eq!(slot.sprite().map(Sprite::width), Some(1));
}

#[test]
fn failed_decode_and_dropped_loader() {
    let (tx, rx) = mpsc::channel();
    let mut slot = SpriteSlot::from_receiver(rx);
    tx.send(Err(DriftlineError::asset("boom"))).unwrap();
    slot.poll();
    assert!(matches!(slot, SpriteSlot::Failed(_)));

    let (tx, rx) = mpsc::channel::<DriftlineResult<Sprite>>();
    drop(tx);
    let mut slot = SpriteSlot::from_receiver(rx);
    slot.poll();
    assert!(matches!(slot, SpriteSlot::Failed(_)));
}

#[test]
fn missing_file_fails_eventually() {
    let mut slot = SpriteSlot::spawn_decode("/definitely/not/here.png");
    for _ in 0..500 {
        slot.poll();
        if !matches!(slot, SpriteSlot::Pending(_)) {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    assert!(matches!(slot, SpriteSlot::Failed(_)));
}

#[test]
fn sheet_lookup() {
    let sheet = SpriteSheet {
        indicator: None,
        cloud: Some(one_px()),
    };
    assert!(sheet.get(SpriteKind::Indicator).is_none());
    assert!(sheet.get(SpriteKind::Cloud).is_some());
}
