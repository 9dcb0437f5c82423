//! Demo page styles - inject once as a <style> block
//!
//! The library only toggles classes; these rules give them a look.

pub fn page_css() -> &'static str {
    r#"
body { margin: 0; background: #0f0f1a; color: #e5e7eb; font-family: system-ui, -apple-system, sans-serif; }
.skip-link { position: absolute; left: -999px; top: 8px; padding: 8px 16px; background: #4f46e5; color: white; border-radius: 6px; z-index: 2000; }
.skip-link:focus { left: 8px; }
[data-animation] { opacity: 0; transform: translateY(24px); transition: opacity 0.6s ease, transform 0.6s ease; }
[data-animation].animated { opacity: 1; transform: none; }
.modal-overlay { position: fixed; inset: 0; background: rgba(15, 15, 26, 0.8); display: flex; align-items: center; justify-content: center; opacity: 0; pointer-events: none; transition: opacity 0.3s ease; z-index: 1000; }
.modal-overlay.active { opacity: 1; pointer-events: auto; }
.modal-container { position: relative; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 32px; max-width: 520px; width: calc(100% - 48px); transform: scale(0.96); transition: transform 0.3s ease; }
.modal-overlay.active .modal-container { transform: none; }
.modal-close { position: absolute; top: 8px; right: 12px; background: none; border: none; color: #9ca3af; font-size: 28px; cursor: pointer; }
"#
}
