use yew::{html, Html};

/// Right-pointing chevron shown at the end of list rows.
pub fn more_right(size: u32, color: &str) -> Html {
    html! {
        <svg
            class="icon icon-more-right"
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 16 16"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path
                d="M6 3L11 8L6 13"
                stroke={color.to_owned()}
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

/// Bell with a slash, shown when there are no notices.
pub fn empty_alarm_image() -> Html {
    html! {
        <svg
            class="image image-empty-alarm"
            width="96"
            height="96"
            viewBox="0 0 96 96"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            role="img"
            aria-label="No notices"
        >
            <circle cx="48" cy="48" r="46" fill="#F5F5F5"/>
            <path
                d="M48 24C38.6 24 32 31.2 32 40V54L26 62H70L64 54V40C64 31.2 57.4 24 48 24Z"
                fill="#E5E5E5"
            />
            <path d="M42 66C42 69.3 44.7 72 48 72C51.3 72 54 69.3 54 66" fill="#E5E5E5"/>
            <path d="M26 26L70 70" stroke="#BDBDBD" stroke-width="4" stroke-linecap="round"/>
        </svg>
    }
}
