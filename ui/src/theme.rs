//! Stylesheet for the dashboard, injected once by `App`.

pub const DASHBOARD_CSS: &str = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        background-color: #010915;
    }

    /* --- ROOT SURFACE --- */
    .dashboard {
        position: relative;
        min-height: 100vh;
        overflow: hidden;
        font-family: 'Montserrat', sans-serif;
        color: #f3f4f6;
        background-color: #010915;
    }

    .dashboard::before {
        content: "";
        position: absolute;
        inset: 0;
        z-index: 0;
        background: linear-gradient(to bottom right, #120042, #010915);
        animation: bg-flow 30s ease-in-out infinite alternate;
    }

    @keyframes bg-flow {
        0% { transform: scale(1.1) translate(0%, 0%); }
        50% { transform: scale(1.5) translate(10%, 10%); }
        100% { transform: scale(1.1) translate(0%, 0%); }
    }

    /* --- BACKGROUND BLOBS --- */
    .blob {
        position: absolute;
        border-radius: 9999px;
        mix-blend-mode: multiply;
        filter: blur(64px);
        opacity: 0.3;
        animation: blob 10s linear infinite alternate;
    }
    .blob-cyan { top: 10%; left: 10%; width: 16rem; height: 16rem; background: #06b6d4; }
    .blob-fuchsia { top: 30%; right: 5%; width: 18rem; height: 18rem; background: #d946ef; }
    .blob-emerald { bottom: 20%; left: 20%; width: 14rem; height: 14rem; background: #10b981; }
    .animation-delay-2000 { animation-delay: 2s; }
    .animation-delay-4000 { animation-delay: 4s; }

    @keyframes blob {
        0% { transform: scale(1) translate(0, 0); }
        33% { transform: scale(1.1) translate(30px, -50px); }
        66% { transform: scale(0.9) translate(-20px, 20px); }
        100% { transform: scale(1) translate(0, 0); }
    }

    /* --- POINTER FOLLOWER --- */
    .pointer-follower {
        position: fixed;
        top: 0;
        left: 0;
        z-index: 50;
        border-radius: 9999px;
        background: linear-gradient(to right, #34d399, #06b6d4);
        filter: blur(24px);
        opacity: 0.7;
        pointer-events: none;
    }
    .pointer-follower::after {
        content: "";
        position: absolute;
        inset: 0;
        border-radius: inherit;
        background: inherit;
        animation: pulse-slow 5s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }

    @keyframes pulse-slow {
        0%, 100% { opacity: 0.7; transform: scale(1.0); }
        50% { opacity: 0.85; transform: scale(1.1); }
    }

    /* --- CONTENT --- */
    .dashboard-content {
        position: relative;
        z-index: 10;
        padding: 3rem;
    }
    .dashboard-header { text-align: center; margin-bottom: 3rem; }
    .dashboard-title {
        margin: 0;
        font-size: 3.75rem;
        font-weight: 800;
        color: transparent;
        background: linear-gradient(to right, #5eead4, #22d3ee);
        -webkit-background-clip: text;
        background-clip: text;
    }
    .dashboard-subtitle { margin-top: 0.5rem; font-size: 1.125rem; color: #d1d5db; }

    .pair-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
        gap: 1.5rem;
        padding: 1rem;
    }

    /* --- TRADING CARD --- */
    .trading-card {
        position: relative;
        padding: 1.5rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(16px);
        border: 1px solid rgba(255, 255, 255, 0.2);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
        transition: transform 0.3s;
    }
    .trading-card:hover { transform: scale(1.03); }
    .trend-badge { position: absolute; top: 1rem; right: 1rem; font-weight: 700; font-size: 1.125rem; }
    .trend-up { color: #4ade80; }
    .trend-down { color: #f87171; }
    .pair-name { margin: 0 0 0.5rem 0; font-size: 1.25rem; font-weight: 700; }
    .quote-row { display: flex; align-items: baseline; gap: 0.5rem; }
    .quote-row p { margin: 0; }
    .quote-price { font-size: 1.875rem; font-weight: 300; }
    .quote-change { font-size: 1.125rem; font-weight: 500; }

    .card-actions { margin-top: 1.5rem; display: flex; justify-content: flex-end; }
    .bell-wrapper { position: relative; }
    .bell-label {
        position: absolute;
        right: 100%;
        top: 50%;
        transform: translateY(-50%);
        margin-right: 1rem;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        background: linear-gradient(to right, #2dd4bf, #06b6d4);
        color: white;
        font-size: 0.875rem;
        white-space: nowrap;
    }
    .bell-button {
        padding: 0.75rem;
        border: none;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.2);
        color: #e5e7eb;
        cursor: pointer;
        transition: all 0.3s;
    }
    .bell-button:hover { background: rgba(255, 255, 255, 0.3); transform: scale(1.1); }

    /* --- ALERT MODAL --- */
    .modal-root {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
    }
    .modal-backdrop { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); backdrop-filter: blur(4px); }
    .modal-panel {
        position: relative;
        width: 100%;
        max-width: 24rem;
        padding: 2rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(16px);
        border: 1px solid rgba(255, 255, 255, 0.2);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
    }
    .modal-title { margin: 0 0 1rem 0; font-size: 1.25rem; font-weight: 700; color: #e5e7eb; }
    .modal-current { margin: 0 0 1rem 0; font-size: 0.875rem; color: #9ca3af; }
    .modal-current-price { font-size: 1.125rem; font-weight: 600; color: white; }
    .modal-fields { display: flex; flex-direction: column; gap: 1rem; }
    .field-label { display: block; font-size: 0.875rem; font-weight: 500; color: #d1d5db; }

    .price-input-wrapper { position: relative; margin-top: 0.25rem; }
    .price-input {
        width: 100%;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        border: 1px solid transparent;
        background: rgba(17, 24, 39, 0.4);
        color: white;
    }
    .price-input:focus { outline: none; box-shadow: 0 0 0 2px #2dd4bf; }
    .stepper {
        position: absolute;
        right: 0.5rem;
        top: 50%;
        transform: translateY(-50%);
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
    }
    .stepper-button {
        width: 1.25rem;
        height: 1.25rem;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 0;
        border: none;
        border-radius: 9999px;
        background: transparent;
        color: white;
        cursor: pointer;
    }
    .stepper-button:hover { background: rgba(255, 255, 255, 0.1); }

    /* Hide the native number input arrows */
    input[type="number"]::-webkit-inner-spin-button,
    input[type="number"]::-webkit-outer-spin-button {
        -webkit-appearance: none;
        margin: 0;
    }
    input[type="number"] { -moz-appearance: textfield; }

    .direction-row { display: flex; align-items: center; gap: 1rem; }
    .direction-options { display: flex; align-items: center; gap: 0.5rem; }
    .direction-option { display: flex; align-items: center; gap: 0.5rem; cursor: pointer; color: #e5e7eb; }

    .modal-actions { margin-top: 1.5rem; display: flex; justify-content: space-between; gap: 0.5rem; }
    .modal-button {
        width: 50%;
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 0.5rem;
        font-size: 0.875rem;
        font-weight: 500;
        cursor: pointer;
        transition: all 0.3s;
    }
    .modal-button.cancel { color: #d1d5db; background: rgba(55, 65, 81, 0.4); }
    .modal-button.cancel:hover { background: rgba(55, 65, 81, 0.5); }
    .modal-button.create { color: white; background: linear-gradient(to right, #2dd4bf, #06b6d4); }
    .modal-button.create:hover { background: linear-gradient(to right, #14b8a6, #0891b2); }
"#;
