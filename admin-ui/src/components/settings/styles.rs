pub const SETTINGS_STYLES: &str = r#"
/* Page */
.settings-container {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    height: 100%;
    padding: 1rem;
    background: var(--page-bg, #0f172a);
    color: var(--text-primary, #f8fafc);
    overflow: auto;
}

.settings-header h2 {
    margin: 0;
    font-size: 1.25rem;
}

.settings-subtitle {
    font-size: 0.8rem;
    color: var(--text-secondary, #94a3b8);
}

.settings-loading {
    padding: 2rem;
    text-align: center;
    color: var(--text-secondary, #94a3b8);
}

/* Tabs */
.tab-strip {
    display: flex;
    gap: 0.4rem;
    border-bottom: 1px solid var(--border-color, #334155);
    padding-bottom: 0.4rem;
}

.tab-button {
    background: transparent;
    border: 1px solid var(--border-color, #334155);
    color: var(--text-secondary, #94a3b8);
    padding: 0.35rem 0.9rem;
    border-radius: 0.375rem;
    font-size: 0.85rem;
    cursor: pointer;
}

.tab-button.tab-active {
    background: var(--accent-bg, #4f46e5);
    border-color: var(--accent-bg, #4f46e5);
    color: #ffffff;
    font-weight: 600;
}

/* Cards */
.panel-card {
    background: var(--card-bg, #1e293b);
    border: 1px solid var(--border-color, #334155);
    border-radius: 0.5rem;
    padding: 0.9rem 1rem;
}

.panel-title {
    margin: 0 0 0.6rem 0;
    font-size: 0.95rem;
}

.empty-hint {
    margin: 0;
    font-size: 0.85rem;
    color: var(--text-muted, #64748b);
}

/* Form */
.form-grid {
    display: flex;
    align-items: flex-end;
    gap: 0.75rem;
    flex-wrap: wrap;
}

.form-field {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
}

.field-label {
    font-size: 0.75rem;
    color: var(--text-secondary, #94a3b8);
}

.field-input {
    background: var(--input-bg, #0f172a);
    color: var(--text-primary, #f8fafc);
    border: 1px solid var(--border-color, #334155);
    border-radius: 0.375rem;
    padding: 0.4rem 0.6rem;
    font-size: 0.85rem;
    min-width: 160px;
}

.field-input.field-missing {
    border-color: var(--danger-bg, #dc2626);
}

.field-hint {
    font-size: 0.7rem;
    color: var(--danger-bg, #dc2626);
}

/* Table */
.data-table {
    width: 100%;
    border-collapse: collapse;
    font-size: 0.85rem;
}

.data-table th {
    text-align: left;
    padding: 0.4rem 0.6rem;
    color: var(--text-secondary, #94a3b8);
    font-weight: 600;
    border-bottom: 1px solid var(--border-color, #334155);
}

.data-table td {
    padding: 0.4rem 0.6rem;
    border-bottom: 1px solid var(--border-color, #334155);
}

.row-actions {
    display: flex;
    gap: 0.4rem;
    justify-content: flex-end;
}

.row-input {
    background: var(--input-bg, #0f172a);
    color: var(--text-primary, #f8fafc);
    border: 1px solid var(--border-color, #334155);
    border-radius: 0.25rem;
    padding: 0.25rem 0.4rem;
    font-size: 0.85rem;
    width: 100%;
    box-sizing: border-box;
}

/* Buttons */
.btn {
    border: none;
    border-radius: 0.375rem;
    padding: 0.4rem 0.9rem;
    font-size: 0.85rem;
    cursor: pointer;
}

.btn:disabled {
    opacity: 0.5;
    cursor: default;
}

.btn-primary {
    background: var(--accent-bg, #4f46e5);
    color: #ffffff;
}

.btn-danger {
    background: var(--danger-bg, #dc2626);
    color: #ffffff;
}

.btn-ghost {
    background: transparent;
    border: 1px solid var(--border-color, #334155);
    color: var(--text-secondary, #94a3b8);
}

/* Dialog */
.dialog-overlay {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    background: rgba(0, 0, 0, 0.7);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}

.dialog-panel {
    background: var(--card-bg, #1e293b);
    border: 1px solid var(--border-color, #334155);
    border-radius: 0.5rem;
    padding: 1.25rem 1.5rem;
    min-width: 360px;
    max-width: 480px;
}

.dialog-title {
    margin: 0 0 0.75rem 0;
    font-size: 1.05rem;
}

.dialog-message {
    margin: 0 0 1rem 0;
    font-size: 0.9rem;
    color: var(--text-secondary, #94a3b8);
    line-height: 1.4;
}

.dialog-actions {
    display: flex;
    justify-content: flex-end;
    gap: 0.5rem;
}
"#;
