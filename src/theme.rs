/// Palette and widget chrome for the landing page and the assistant panel.
pub const MERIDIAN_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-muted: #f4f6f8;
    --color-bg-overlay: rgba(15, 23, 42, 0.45);
    --color-text-primary: #0f172a;
    --color-text-muted: #64748b;
    --color-border: #e2e8f0;
    --color-primary: #0b3d91;
    --color-primary-hover: #0a3380;
    --color-primary-text: #ffffff;
    --color-primary-soft: rgba(11, 61, 145, 0.1);
}
body { margin: 0; font-family: system-ui, sans-serif; background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { display: flex; align-items: center; justify-content: space-between; padding: 1rem 2rem; border-bottom: 1px solid var(--color-border); }
.header-wordmark { font-weight: 700; font-size: 1.25rem; }
.hero { padding: 6rem 2rem; max-width: 48rem; }
.hero h1 { font-size: 3rem; margin: 0 0 1rem; }
.btn { border: none; border-radius: 0.5rem; padding: 0.5rem 1rem; cursor: pointer; }
.btn-primary { background: var(--color-primary); color: var(--color-primary-text); }
.btn-primary:hover { background: var(--color-primary-hover); }
.btn:disabled { opacity: 0.5; cursor: default; }
.launcher { position: fixed; bottom: 2rem; right: 2rem; width: 4rem; height: 4rem; border-radius: 9999px; z-index: 50; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15); }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0, 0, 0, 0); }
.dialog-overlay { position: fixed; inset: 0; background: var(--color-bg-overlay); display: flex; align-items: center; justify-content: center; z-index: 60; }
.dialog { width: min(500px, 100vw); height: 600px; display: flex; flex-direction: column; background: var(--color-bg-primary); border-radius: 0.75rem; overflow: hidden; }
.dialog-header { display: flex; align-items: center; gap: 0.5rem; padding: 1rem; border-bottom: 1px solid var(--color-border); background: var(--color-bg-muted); }
.dialog-title { font-size: 1rem; margin: 0; }
.dialog-description { font-size: 0.75rem; color: var(--color-text-muted); margin: 0; }
.dialog-close { margin-left: auto; background: transparent; }
.avatar { width: 2rem; height: 2rem; border-radius: 9999px; background: var(--color-primary-soft); color: var(--color-primary); display: flex; align-items: center; justify-content: center; flex-shrink: 0; font-weight: 600; }
.chat-list { flex: 1; overflow-y: auto; padding: 1rem; display: flex; flex-direction: column; gap: 1rem; }
.chat-empty { text-align: center; color: var(--color-text-muted); font-size: 0.875rem; padding: 2rem 0; }
.message-row { display: flex; gap: 0.5rem; font-size: 0.875rem; }
.message-row.user { justify-content: flex-end; }
.message-row.assistant { justify-content: flex-start; }
.bubble { border-radius: 1rem; padding: 0.5rem 1rem; max-width: 80%; }
.bubble.user { background: var(--color-primary); color: var(--color-primary-text); border-bottom-right-radius: 0; white-space: pre-wrap; }
.bubble.assistant { background: var(--color-bg-muted); border-bottom-left-radius: 0; }
.bubble.assistant table { border-collapse: collapse; }
.bubble.assistant td, .bubble.assistant th { border: 1px solid var(--color-border); padding: 0.25rem 0.5rem; }
.typing { display: flex; gap: 0.25rem; align-items: center; color: var(--color-text-muted); }
.typing span { width: 0.375rem; height: 0.375rem; border-radius: 9999px; background: currentColor; animation: bounce 1s infinite; }
.typing span:nth-child(2) { animation-delay: 0.15s; }
.typing span:nth-child(3) { animation-delay: 0.3s; }
@keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-0.25rem); } }
.composer { display: flex; gap: 0.5rem; align-items: flex-end; padding: 0.75rem; border-top: 1px solid var(--color-border); }
.composer textarea { flex: 1; min-height: 2.5rem; resize: none; border: 1px solid var(--color-border); border-radius: 0.5rem; padding: 0.5rem; font: inherit; }
"#;
