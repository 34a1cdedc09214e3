//! Stylesheet injected together with the widget markup
//!
//! All selectors are scoped under `.smartair-reservation-form` so the widget
//! does not leak styles into the host page.

pub const WIDGET_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');

.smartair-reservation-form, .smartair-reservation-form * {
    box-sizing: border-box;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
}
.smartair-reservation-form {
    max-width: 600px;
    margin: 0 auto;
    padding: 32px;
    background: #ffffff;
    border-radius: 16px;
    box-shadow: 0 4px 20px rgba(0,0,0,0.1);
}
.smartair-reservation-form h2 { font-size: 28px; font-weight: 700; color: #1a1a2e; margin-bottom: 8px; text-align: center; }
.smartair-reservation-form .subtitle { color: #666; text-align: center; margin-bottom: 32px; }
.smartair-reservation-form .form-group { margin-bottom: 20px; }
.smartair-reservation-form .form-group label { display: block; font-weight: 500; margin-bottom: 8px; color: #333; }
.smartair-reservation-form .required { color: #ef4444; }
.smartair-reservation-form input,
.smartair-reservation-form textarea {
    width: 100%;
    padding: 14px 16px;
    border: 2px solid #e5e7eb;
    border-radius: 10px;
    font-size: 16px;
}
.smartair-reservation-form input:focus,
.smartair-reservation-form textarea:focus {
    outline: none;
    border-color: #3b82f6;
    box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.1);
}
.smartair-reservation-form textarea { min-height: 100px; resize: vertical; }
.smartair-reservation-form .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
@media (max-width: 500px) {
    .smartair-reservation-form .form-row { grid-template-columns: 1fr; }
}
.smartair-reservation-form .type-options,
.smartair-reservation-form .time-slots { display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; }
.smartair-reservation-form .type-option,
.smartair-reservation-form .time-slot {
    padding: 12px;
    border: 2px solid #e5e7eb;
    border-radius: 8px;
    text-align: center;
    cursor: pointer;
    transition: all 0.2s;
}
.smartair-reservation-form .type-option:hover,
.smartair-reservation-form .time-slot:hover { border-color: #3b82f6; }
.smartair-reservation-form .time-slot.selected { background: #3b82f6; border-color: #3b82f6; color: white; }
.smartair-reservation-form .type-option.selected {
    background: linear-gradient(135deg, #3b82f6 0%, #06b6d4 100%);
    border-color: transparent;
    color: white;
}
.smartair-reservation-form .type-option .icon { font-size: 24px; margin-bottom: 8px; }
.smartair-reservation-form .type-option .label { font-weight: 600; font-size: 14px; }
.smartair-reservation-form .submit-btn {
    width: 100%;
    padding: 16px;
    margin-top: 24px;
    background: linear-gradient(135deg, #3b82f6 0%, #06b6d4 100%);
    color: white;
    border: none;
    border-radius: 10px;
    font-size: 18px;
    font-weight: 600;
    cursor: pointer;
}
.smartair-reservation-form .submit-btn:disabled { opacity: 0.7; cursor: not-allowed; }
.smartair-reservation-form .error-message {
    background: #fee2e2;
    color: #991b1b;
    padding: 12px 16px;
    border-radius: 8px;
    margin-bottom: 16px;
}
.smartair-reservation-form .selected-products {
    background: #f8fafc;
    border: 2px dashed #e5e7eb;
    border-radius: 12px;
    padding: 16px;
}
.smartair-reservation-form .selected-products ul { list-style: none; display: flex; flex-direction: column; gap: 8px; margin: 0; padding: 0; }
.smartair-reservation-form .selected-products li {
    display: flex;
    justify-content: space-between;
    align-items: center;
    background: #ffffff;
    padding: 10px 12px;
    border-radius: 10px;
    border: 1px solid #e5e7eb;
    font-size: 14px;
}
.smartair-reservation-form .selected-products button {
    border: none;
    background: #fee2e2;
    color: #991b1b;
    border-radius: 8px;
    padding: 6px 10px;
    cursor: pointer;
    font-size: 12px;
    font-weight: 600;
}
.smartair-reservation-form .success-message { text-align: center; padding: 40px 20px; }
.smartair-reservation-form .success-message .icon { font-size: 64px; margin-bottom: 16px; }
.smartair-reservation-form .success-message h3 { font-size: 24px; color: #10b981; margin-bottom: 12px; }
.smartair-reservation-form .reservation-id {
    background: #f3f4f6;
    padding: 12px 20px;
    border-radius: 8px;
    font-family: monospace;
    font-size: 18px;
    display: inline-block;
}
.smartair-reservation-form .phone-link { display: block; text-align: center; margin-top: 20px; color: #666; }
.smartair-reservation-form .phone-link a { color: #3b82f6; font-weight: 600; text-decoration: none; }
"#;
