use super::*;

fn article(id: u64, status: ArticleStatus) -> Article {
    Article {
        id: ArticleId::from(id),
        title: format!("t{id}"),
        image: String::new(),
        date: String::new(),
        status,
    }
}

#[test]
fn gate_default_is_idle() {
    let gate = ActiveGate::default();
    assert!(gate.is_idle());
    assert!(gate.target().is_none());
    assert!(gate.prompt().is_none());
}

#[test]
fn open_over_idle_succeeds() {
    let mut gate = ActiveGate::Idle;
    gate.open(ActiveGate::DeletePending(article(1, ArticleStatus::Published))).unwrap();
    assert_eq!(gate.target().map(|a| a.id.clone()), Some(ArticleId::from(1)));
}

#[test]
fn open_over_pending_is_busy_and_keeps_first() {
    let mut gate = ActiveGate::ResetPending;
    let err = gate.open(ActiveGate::BlockPending(article(1, ArticleStatus::Published)));
    assert_eq!(err, Err(GateError::Busy));
    assert_eq!(gate, ActiveGate::ResetPending);
}

#[test]
fn take_returns_content_and_idles() {
    let mut gate = ActiveGate::ResetPending;
    assert_eq!(gate.take(), Ok(ActiveGate::ResetPending));
    assert!(gate.is_idle());
    assert_eq!(gate.take(), Err(GateError::NotPending));
}

#[test]
fn block_prompt_follows_target_status() {
    let gate = ActiveGate::BlockPending(article(1, ArticleStatus::Unpublished));
    assert_eq!(gate.prompt(), Some("Are you sure you want to publish this article?"));
    let gate = ActiveGate::BlockPending(article(1, ArticleStatus::Published));
    assert_eq!(gate.prompt(), Some("Are you sure you want to unpublish this article?"));
}

#[test]
fn delete_and_reset_prompts() {
    let gate = ActiveGate::DeletePending(article(1, ArticleStatus::Published));
    assert_eq!(gate.prompt(), Some("Are you sure you want to delete this article?"));
    assert_eq!(ActiveGate::ResetPending.prompt(), Some("Are you sure you want to reset all input values?"));
}

#[test]
fn close_if_targets_matches_id_only() {
    let mut gate = ActiveGate::DeletePending(article(2, ArticleStatus::Published));
    assert!(!gate.close_if_targets(&ArticleId::from(3)));
    assert!(!gate.is_idle());
    assert!(gate.close_if_targets(&ArticleId::from(2)));
    assert!(gate.is_idle());

    let mut gate = ActiveGate::ResetPending;
    assert!(!gate.close_if_targets(&ArticleId::from(2)));
}
